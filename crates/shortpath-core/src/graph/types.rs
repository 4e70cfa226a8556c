use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Cost of traversing an edge, or a cumulative distance from the source.
///
/// Integer and fractional weights are both stored as `f64`. `Weight::INFINITY`
/// marks a node the source cannot reach.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);
    pub const INFINITY: Weight = Weight(f64::INFINITY);

    pub fn new(value: f64) -> Self {
        Weight(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Total order over weights, used by the frontier heap
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl std::iter::Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Self {
        iter.fold(Weight::ZERO, |acc, w| acc + w)
    }
}

impl From<i32> for Weight {
    fn from(value: i32) -> Self {
        Weight(value as f64)
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        Weight(value)
    }
}

impl fmt::Display for Weight {
    // f64 Display already renders 2.0 as "2" and infinity as "inf"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Weighted adjacency map: node -> {neighbor -> weight}.
///
/// Nodes and each node's neighbors keep their insertion order, which is the
/// order the engine relaxes edges in. Neighbors are not required to be nodes
/// at construction time; the closed-vertex-set invariant is checked by
/// [`crate::graph::validate`] before any computation.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    nodes: Vec<N>,
    positions: HashMap<N, usize>,
    adjacency: Vec<Vec<(N, Weight)>>,
}

// `positions` is an index over `nodes`
impl<N: PartialEq> PartialEq for Graph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.adjacency == other.adjacency
    }
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            positions: HashMap::new(),
            adjacency: Vec::new(),
        }
    }
}

impl<N: Clone + Eq + Hash> Graph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node, returning its position. Existing nodes are left untouched.
    pub fn add_node(&mut self, node: N) -> usize {
        if let Some(&pos) = self.positions.get(&node) {
            return pos;
        }
        let pos = self.nodes.len();
        self.positions.insert(node.clone(), pos);
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        pos
    }

    /// Insert a one-directional arc. Re-inserting an arc replaces its weight.
    pub fn add_arc(&mut self, from: N, to: N, weight: impl Into<Weight>) {
        let weight = weight.into();
        let pos = self.add_node(from);
        let neighbors = &mut self.adjacency[pos];
        match neighbors.iter().position(|(n, _)| *n == to) {
            Some(i) => neighbors[i].1 = weight,
            None => neighbors.push((to, weight)),
        }
    }

    /// Insert an undirected edge: both arcs, same weight.
    pub fn add_edge(&mut self, a: N, b: N, weight: impl Into<Weight>) {
        let weight = weight.into();
        self.add_node(a.clone());
        self.add_node(b.clone());
        self.add_arc(a.clone(), b.clone(), weight);
        self.add_arc(b, a, weight);
    }

    pub fn contains(&self, node: &N) -> bool {
        self.positions.contains_key(node)
    }

    pub fn position(&self, node: &N) -> Option<usize> {
        self.positions.get(node).copied()
    }

    pub fn node_at(&self, pos: usize) -> Option<&N> {
        self.nodes.get(pos)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored arcs (an undirected edge counts twice)
    pub fn arc_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Neighbors of `node` with edge weights, empty for unknown nodes
    pub fn neighbors(&self, node: &N) -> &[(N, Weight)] {
        match self.position(node) {
            Some(pos) => &self.adjacency[pos],
            None => &[],
        }
    }

    /// Neighbors of the node at `pos`, empty if out of range
    pub fn neighbors_at(&self, pos: usize) -> &[(N, Weight)] {
        self.adjacency.get(pos).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn weight(&self, from: &N, to: &N) -> Option<Weight> {
        self.neighbors(from)
            .iter()
            .find(|(n, _)| n == to)
            .map(|(_, w)| *w)
    }

    /// Every arc as `(from, to, weight)`, in insertion order
    pub fn arcs(&self) -> impl Iterator<Item = (&N, &N, Weight)> {
        self.nodes
            .iter()
            .zip(self.adjacency.iter())
            .flat_map(|(from, neighbors)| neighbors.iter().map(move |(to, w)| (from, to, *w)))
    }
}
