//! Weighted graph model and shortest-path computation
//!
//! - `types`: `Graph` and `Weight`
//! - `validate`: precondition checks run before every computation
//! - `algos`: Dijkstra with lazy deletion
//! - `trace`: typed events emitted while the engine runs
//! - `paths`: distance and path tables returned by the engine

pub mod algos;
pub mod paths;
pub mod trace;
pub mod types;
pub mod validate;

pub use algos::{compute, compute_traced, Dijkstra, EngineStats};
pub use paths::ShortestPaths;
pub use trace::TraceEvent;
pub use types::{Graph, Weight};
pub use validate::{validate, validate_graph};
