//! Text reporting of shortest-path results
//!
//! Three renditions of the same data:
//! - `human`: progress lines followed by distance and path listings
//! - `json`: a single machine-readable document
//! - `records`: line-oriented records for scripting and LLM context

pub mod human;
pub mod json;
pub mod records;

use crate::graph::{ShortestPaths, TraceEvent};

pub use human::write_human;
pub use json::{to_json, write_json};
pub use records::write_records;

/// Everything a reporter needs from one engine run
#[derive(Debug, Clone, Copy)]
pub struct Report<'a, N> {
    pub result: &'a ShortestPaths<N>,
    /// Trace events, if the caller asked for them
    pub trace: Option<&'a [TraceEvent<N>]>,
}

impl<'a, N> Report<'a, N> {
    pub fn new(result: &'a ShortestPaths<N>) -> Self {
        Self {
            result,
            trace: None,
        }
    }

    pub fn with_trace(mut self, trace: &'a [TraceEvent<N>]) -> Self {
        self.trace = Some(trace);
        self
    }
}
