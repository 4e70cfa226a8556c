//! Shortest-path algorithm implementations
//!
//! - `dijkstra`: single-source shortest paths over non-negative weights

pub mod dijkstra;

pub use dijkstra::{compute, compute_traced, Dijkstra, EngineStats};
