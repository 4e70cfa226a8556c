//! Entry validation for shortest-path queries
//!
//! Everything the engine relies on is checked here, before the first
//! frontier pop, so a bad graph never produces a partial result.

use crate::bail_invalid;
use crate::error::Result;
use crate::graph::types::{Graph, Weight};
use std::fmt::Display;
use std::hash::Hash;

/// Check that `graph` is well formed and `source` is one of its nodes.
///
/// Rejects:
/// - a source that is not a node of the graph
/// - arcs whose target is not a node (closed vertex set)
/// - negative, NaN, or infinite edge weights
/// - weights whose total is not finite, since a path sum could overflow
pub fn validate<N>(graph: &Graph<N>, source: &N) -> Result<()>
where
    N: Clone + Eq + Hash + Display,
{
    if !graph.contains(source) {
        bail_invalid!("source node '{}' is not in the graph", source);
    }

    validate_graph(graph)
}

/// Check the graph alone, independent of any source node
pub fn validate_graph<N>(graph: &Graph<N>) -> Result<()>
where
    N: Clone + Eq + Hash + Display,
{
    for (from, to, weight) in graph.arcs() {
        if !graph.contains(to) {
            bail_invalid!("edge '{}' -> '{}' references unknown node '{}'", from, to, to);
        }
        if !weight.is_finite() {
            bail_invalid!("edge '{}' -> '{}' has non-finite weight {}", from, to, weight);
        }
        if weight.is_negative() {
            bail_invalid!("edge '{}' -> '{}' has negative weight {}", from, to, weight);
        }
    }

    // Any simple path costs at most the sum of all arcs
    let total: Weight = graph.arcs().map(|(_, _, weight)| weight).sum();
    if !total.is_finite() {
        bail_invalid!("edge weights overflow: their total exceeds the largest distance");
    }

    Ok(())
}
