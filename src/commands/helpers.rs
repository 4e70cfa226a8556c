//! Helper functions shared across commands

use shortpath_core::bail_usage;
use shortpath_core::config::GraphFile;
use shortpath_core::error::Result;
use shortpath_core::graph::Graph;

use crate::cli::GraphArgs;

/// A graph ready for computation plus the source it should start from
#[derive(Debug)]
pub struct LoadedGraph {
    pub graph: Graph<String>,
    pub source: Option<String>,
}

impl LoadedGraph {
    /// The source node, or a usage error if neither the command line nor
    /// the graph file named one
    pub fn require_source(&self) -> Result<&String> {
        match &self.source {
            Some(source) => Ok(source),
            None => bail_usage!("no source node: pass --source or set `source` in the graph file"),
        }
    }
}

/// Load the graph named by `--graph`, or the sample graph.
///
/// `--source` wins over the file's own `source`.
pub fn load_graph(args: &GraphArgs) -> Result<LoadedGraph> {
    let file = match &args.graph {
        Some(path) => GraphFile::load(path)?,
        None => GraphFile::sample(),
    };

    let source = args.source.clone().or_else(|| file.source.clone());
    Ok(LoadedGraph {
        graph: file.to_graph()?,
        source,
    })
}
