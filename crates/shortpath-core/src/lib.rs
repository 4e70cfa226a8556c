//! Shortpath Core Library
//!
//! Single-source shortest paths over small weighted graphs: the graph model,
//! the Dijkstra engine and its trace events, plus the reporting, rendering,
//! and graph-file collaborators that consume the engine's output.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod render;
pub mod report;
