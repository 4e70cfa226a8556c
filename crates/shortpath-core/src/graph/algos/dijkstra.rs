use crate::error::Result;
use crate::graph::paths::ShortestPaths;
use crate::graph::trace::TraceEvent;
use crate::graph::types::{Graph, Weight};
use crate::graph::validate::validate;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};
use std::fmt::Display;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::time::Instant;

/// Frontier candidate. Wrapped in `Reverse` to turn `BinaryHeap` into a
/// min-heap ordered by distance, then by insertion sequence.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeapEntry {
    pub(crate) position: usize,
    pub(crate) distance: Weight,
    pub(crate) seq: u64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Counters collected over one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineStats {
    /// Frontier entries popped
    pub pops: usize,
    /// Pops whose distance had already been improved
    pub stale_pops: usize,
    /// Strict improvements applied to the distance table
    pub relaxations: usize,
}

/// A single-source shortest-path run, driven as an iterator of trace events.
///
/// Each call to `next` emits the pending `Updated` events of the last
/// processed node, or pops the frontier and emits `Processing`. The stream
/// is finite and cannot be restarted; [`Dijkstra::finish`] drains whatever
/// is left and returns the distance and path tables.
pub struct Dijkstra<'g, N> {
    graph: &'g Graph<N>,
    source: usize,
    distances: Vec<Weight>,
    predecessors: Vec<Option<usize>>,
    frontier: BinaryHeap<Reverse<HeapEntry>>,
    pending: VecDeque<TraceEvent<N>>,
    next_seq: u64,
    stats: EngineStats,
    started: Instant,
}

impl<'g, N> Dijkstra<'g, N>
where
    N: Clone + Eq + Hash + Display,
{
    /// Validate the input and seed the frontier with the source.
    pub fn new(graph: &'g Graph<N>, source: &N) -> Result<Self> {
        validate(graph, source)?;

        let node_count = graph.node_count();
        // validate() guarantees the source is present
        let source_pos = graph.position(source).unwrap_or_default();

        let mut run = Self {
            graph,
            source: source_pos,
            distances: vec![Weight::INFINITY; node_count],
            predecessors: vec![None; node_count],
            frontier: BinaryHeap::new(),
            pending: VecDeque::new(),
            next_seq: 0,
            stats: EngineStats::default(),
            started: Instant::now(),
        };
        run.distances[source_pos] = Weight::ZERO;
        run.push(source_pos, Weight::ZERO);

        tracing::debug!(
            source = %source,
            nodes = node_count,
            arcs = graph.arc_count(),
            "dijkstra_start"
        );
        Ok(run)
    }

    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    fn push(&mut self, position: usize, distance: Weight) {
        self.frontier.push(Reverse(HeapEntry {
            position,
            distance,
            seq: self.next_seq,
        }));
        self.next_seq += 1;
    }

    /// Pop one frontier entry and relax its neighbors, queueing `Updated`
    /// events. Returns the `Processing` event for the popped node.
    fn step(&mut self) -> Option<TraceEvent<N>> {
        let Reverse(entry) = self.frontier.pop()?;
        let (current, dist) = (entry.position, entry.distance);
        let graph = self.graph;

        self.stats.pops += 1;
        if dist > self.distances[current] {
            self.stats.stale_pops += 1;
        }

        for (neighbor, weight) in graph.neighbors_at(current) {
            let Some(next) = graph.position(neighbor) else {
                continue;
            };

            let candidate = dist + *weight;
            let previous = self.distances[next];

            // Strict improvement only; stale pops fall through as no-ops
            if candidate < previous {
                self.pending.push_back(TraceEvent::Updated {
                    node: neighbor.clone(),
                    previous_distance: previous,
                    new_distance: candidate,
                });
                self.distances[next] = candidate;
                self.predecessors[next] = Some(current);
                self.push(next, candidate);
                self.stats.relaxations += 1;
            }
        }

        graph.node_at(current).map(|node| TraceEvent::Processing {
            node: node.clone(),
            distance: dist,
        })
    }

    /// Run to completion and return the distance and path tables
    pub fn finish(mut self) -> ShortestPaths<N> {
        for _ in self.by_ref() {}

        let nodes = self.graph.nodes().to_vec();
        let paths = (0..nodes.len())
            .map(|pos| reconstruct_path(self.source, pos, &self.predecessors, &nodes))
            .collect();

        tracing::debug!(
            elapsed = ?self.started.elapsed(),
            pops = self.stats.pops,
            stale_pops = self.stats.stale_pops,
            relaxations = self.stats.relaxations,
            "dijkstra_complete"
        );

        let source = nodes[self.source].clone();
        ShortestPaths::new(source, nodes, self.distances, paths)
    }
}

impl<N> Iterator for Dijkstra<'_, N>
where
    N: Clone + Eq + Hash + Display,
{
    type Item = TraceEvent<N>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }
        self.step()
    }
}

impl<N> FusedIterator for Dijkstra<'_, N> where N: Clone + Eq + Hash + Display {}

/// Walk predecessors back from `target` to `source`.
///
/// Returns `None` for nodes that were never reached.
fn reconstruct_path<N: Clone>(
    source: usize,
    target: usize,
    predecessors: &[Option<usize>],
    nodes: &[N],
) -> Option<Vec<N>> {
    if target != source && predecessors[target].is_none() {
        return None;
    }

    let mut path = vec![nodes[target].clone()];
    let mut current = target;
    while current != source {
        current = predecessors[current]?;
        path.push(nodes[current].clone());
    }
    path.reverse();
    Some(path)
}

/// Compute shortest distances and paths from `source` to every node.
///
/// Fails with `InvalidInput` before any work is done if the source is not a
/// node, a weight is negative or non-finite, or an arc points outside the
/// node set.
#[tracing::instrument(skip_all, fields(source = %source, nodes = graph.node_count()))]
pub fn compute<N>(graph: &Graph<N>, source: &N) -> Result<ShortestPaths<N>>
where
    N: Clone + Eq + Hash + Display,
{
    Ok(Dijkstra::new(graph, source)?.finish())
}

/// Like [`compute`], also returning every trace event in algorithm order
#[tracing::instrument(skip_all, fields(source = %source, nodes = graph.node_count()))]
pub fn compute_traced<N>(
    graph: &Graph<N>,
    source: &N,
) -> Result<(ShortestPaths<N>, Vec<TraceEvent<N>>)>
where
    N: Clone + Eq + Hash + Display,
{
    let mut run = Dijkstra::new(graph, source)?;
    let events: Vec<_> = run.by_ref().collect();
    Ok((run.finish(), events))
}

#[cfg(test)]
mod tests;
