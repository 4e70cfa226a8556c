//! CLI commands for shortpath

pub mod check;
pub mod dispatch;
pub mod helpers;
pub mod paths;
pub mod render;
pub mod sample;
