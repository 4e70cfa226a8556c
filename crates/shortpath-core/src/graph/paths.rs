//! Result of a single-source shortest-path computation

use crate::graph::types::{Graph, Weight};
use std::collections::HashMap;
use std::hash::Hash;

/// Distance and path tables for one source.
///
/// `distances` covers every node of the graph (unreachable nodes hold
/// [`Weight::INFINITY`]); `paths` covers the source and every reachable node.
/// Iteration follows the graph's node order.
#[derive(Debug, Clone)]
pub struct ShortestPaths<N> {
    source: N,
    nodes: Vec<N>,
    positions: HashMap<N, usize>,
    distances: Vec<Weight>,
    paths: Vec<Option<Vec<N>>>,
}

impl<N: PartialEq> PartialEq for ShortestPaths<N> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.nodes == other.nodes
            && self.distances == other.distances
            && self.paths == other.paths
    }
}

impl<N: Clone + Eq + Hash> ShortestPaths<N> {
    pub(crate) fn new(
        source: N,
        nodes: Vec<N>,
        distances: Vec<Weight>,
        paths: Vec<Option<Vec<N>>>,
    ) -> Self {
        let positions = nodes
            .iter()
            .enumerate()
            .map(|(pos, node)| (node.clone(), pos))
            .collect();
        Self {
            source,
            nodes,
            positions,
            distances,
            paths,
        }
    }

    pub fn source(&self) -> &N {
        &self.source
    }

    /// Best distance from the source; `None` if `node` is not in the graph
    pub fn distance(&self, node: &N) -> Option<Weight> {
        self.positions.get(node).map(|&pos| self.distances[pos])
    }

    /// One shortest path from the source to `node`, source first
    pub fn path(&self, node: &N) -> Option<&[N]> {
        self.positions
            .get(node)
            .and_then(|&pos| self.paths[pos].as_deref())
    }

    pub fn is_reachable(&self, node: &N) -> bool {
        self.path(node).is_some()
    }

    /// Every node with its distance, in graph order
    pub fn distances(&self) -> impl Iterator<Item = (&N, Weight)> {
        self.nodes.iter().zip(self.distances.iter().copied())
    }

    /// Every reachable node with its path, in graph order
    pub fn paths(&self) -> impl Iterator<Item = (&N, &[N])> {
        self.nodes
            .iter()
            .zip(self.paths.iter())
            .filter_map(|(node, path)| path.as_deref().map(|p| (node, p)))
    }

    /// Nodes the source cannot reach, in graph order
    pub fn unreachable(&self) -> impl Iterator<Item = &N> {
        self.nodes
            .iter()
            .zip(self.paths.iter())
            .filter(|(_, path)| path.is_none())
            .map(|(node, _)| node)
    }

    pub fn reachable_count(&self) -> usize {
        self.paths.iter().filter(|p| p.is_some()).count()
    }

    /// Consecutive `(from, to)` pairs along the path to `node`
    pub fn path_edges(&self, node: &N) -> Vec<(&N, &N)> {
        self.path(node)
            .map(|path| path.windows(2).map(|pair| (&pair[0], &pair[1])).collect())
            .unwrap_or_default()
    }

    /// Sum of edge weights along the path to `node` as stored in `graph`.
    ///
    /// Returns `None` if `node` is unreachable or the path uses an arc the
    /// graph does not have.
    pub fn path_cost(&self, graph: &Graph<N>, node: &N) -> Option<Weight> {
        self.path(node)?
            .windows(2)
            .map(|pair| graph.weight(&pair[0], &pair[1]))
            .sum()
    }

    /// Split into plain `node -> distance` and `node -> path` maps
    pub fn into_maps(self) -> (HashMap<N, Weight>, HashMap<N, Vec<N>>) {
        let mut distances = HashMap::with_capacity(self.nodes.len());
        let mut paths = HashMap::new();
        for ((node, distance), path) in self
            .nodes
            .into_iter()
            .zip(self.distances)
            .zip(self.paths)
        {
            if let Some(path) = path {
                paths.insert(node.clone(), path);
            }
            distances.insert(node, distance);
        }
        (distances, paths)
    }
}
