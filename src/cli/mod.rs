//! CLI argument parsing for shortpath
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod format;
pub mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Shortpath - single-source shortest paths over weighted graphs
#[derive(Parser, Debug)]
#[command(name = "shortpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "SHORTPATH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where the graph comes from and which node to start at
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct GraphArgs {
    /// Graph file (.toml, .json, .yaml, .yml); the built-in sample graph if omitted
    #[arg(long, short)]
    pub graph: Option<PathBuf>,

    /// Source node, overriding the graph file's `source`
    #[arg(long, short)]
    pub source: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute shortest distances and paths from the source node
    Paths {
        #[command(flatten)]
        input: GraphArgs,

        /// Include every processing and update step
        #[arg(long, short)]
        trace: bool,
    },

    /// Render the graph as Graphviz DOT with shortest paths highlighted
    Render {
        #[command(flatten)]
        input: GraphArgs,

        /// Write the DOT document to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Validate a graph without computing paths
    Check {
        #[command(flatten)]
        input: GraphArgs,
    },

    /// Print the built-in sample graph, or save it as a starting point
    Sample {
        /// Write the graph to a file; the extension picks TOML, JSON, or YAML
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}
