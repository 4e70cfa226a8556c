use crate::graph::types::Weight;
use serde::Serialize;
use std::fmt;

/// A step of the shortest-path computation, emitted in algorithm order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent<N> {
    /// A frontier entry was popped and its neighbors are about to be relaxed
    Processing { node: N, distance: Weight },
    /// A neighbor's best-known distance strictly improved
    Updated {
        node: N,
        previous_distance: Weight,
        new_distance: Weight,
    },
}

impl<N> TraceEvent<N> {
    pub fn node(&self) -> &N {
        match self {
            TraceEvent::Processing { node, .. } | TraceEvent::Updated { node, .. } => node,
        }
    }

    pub fn is_processing(&self) -> bool {
        matches!(self, TraceEvent::Processing { .. })
    }
}

impl<N: fmt::Display> fmt::Display for TraceEvent<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Processing { node, distance } => write!(
                f,
                "Processing node '{}' with cumulative distance: {}",
                node, distance
            ),
            TraceEvent::Updated {
                node,
                previous_distance,
                new_distance,
            } => write!(
                f,
                "  Updating node '{}': previous distance {}, new distance {}",
                node, previous_distance, new_distance
            ),
        }
    }
}
