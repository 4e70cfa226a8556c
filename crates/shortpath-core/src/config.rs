//! Graph file configuration
//!
//! A graph file names an optional default source node and describes the
//! graph as undirected `edges`, one-directional `adjacency` arcs, and
//! isolated `nodes`. TOML, JSON, and YAML are accepted, chosen by extension.
//!
//! ```toml
//! source = "R"
//!
//! [[edges]]
//! from = "R"
//! to = "E"
//! weight = 2
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShortpathError};
use crate::graph::{Graph, Weight};

/// Supported graph file extensions
pub const SUPPORTED_EXTENSIONS: &str = "toml, json, yaml, yml";

/// An undirected edge entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

impl EdgeSpec {
    pub fn new(from: &str, to: &str, weight: impl Into<Weight>) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            weight: weight.into(),
        }
    }
}

/// On-disk description of a graph and its default source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphFile {
    /// Default source node, overridable from the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Nodes to declare even if no edge mentions them
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<String>,

    /// Undirected edges, inserted in both directions
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<EdgeSpec>,

    /// Raw `node -> {neighbor -> weight}` arcs, inserted as given
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub adjacency: BTreeMap<String, BTreeMap<String, Weight>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Json,
    Yaml,
}

impl FileFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => Ok(FileFormat::Toml),
            "json" => Ok(FileFormat::Json),
            "yaml" | "yml" => Ok(FileFormat::Yaml),
            other => Err(ShortpathError::unsupported(
                "graph file extension",
                if other.is_empty() { "(none)" } else { other },
                SUPPORTED_EXTENSIONS,
            )),
        }
    }
}

impl GraphFile {
    /// The weighted graph used when no file is given (source `R`)
    pub fn sample() -> Self {
        let edges = [
            ("R", "E", 2),
            ("R", "C", 4),
            ("E", "G", 7),
            ("E", "F", 3),
            ("C", "F", 1),
            ("C", "D", 5),
            ("G", "D", 2),
            ("F", "B", 8),
            ("D", "B", 6),
        ]
        .into_iter()
        .map(|(from, to, weight)| EdgeSpec::new(from, to, weight))
        .collect();

        Self {
            source: Some("R".to_string()),
            edges,
            ..Default::default()
        }
    }

    /// Load a graph file, choosing the parser by extension
    pub fn load(path: &Path) -> Result<Self> {
        let format = FileFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        let file = Self::parse(&content, format)?;

        tracing::debug!(
            path = %path.display(),
            nodes = file.nodes.len(),
            edges = file.edges.len(),
            adjacency = file.adjacency.len(),
            "load_graph_file"
        );
        Ok(file)
    }

    fn parse(content: &str, format: FileFormat) -> Result<Self> {
        let file: Self = match format {
            FileFormat::Toml => toml::from_str(content)?,
            FileFormat::Json => serde_json::from_str(content)?,
            FileFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(file)
    }

    /// Save in the format implied by the extension
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = match FileFormat::from_path(path)? {
            FileFormat::Toml => self.to_toml()?,
            FileFormat::Json => serde_json::to_string_pretty(self)? + "\n",
            FileFormat::Yaml => serde_yaml::to_string(self)?,
        };
        fs::write(path, content)?;

        tracing::debug!(path = %path.display(), "save_graph_file");
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ShortpathError::failed("serialize graph", e))
    }

    /// Build the in-memory graph: declared nodes first, then edges, then
    /// adjacency arcs. Later entries for the same arc replace earlier weights.
    pub fn to_graph(&self) -> Result<Graph<String>> {
        let mut graph = Graph::new();

        for node in &self.nodes {
            graph.add_node(checked_label(node)?);
        }
        for edge in &self.edges {
            graph.add_edge(
                checked_label(&edge.from)?,
                checked_label(&edge.to)?,
                edge.weight,
            );
        }
        for (from, neighbors) in &self.adjacency {
            graph.add_node(checked_label(from)?);
            for (to, weight) in neighbors {
                graph.add_arc(from.clone(), checked_label(to)?, *weight);
            }
        }

        Ok(graph)
    }
}

fn checked_label(label: &str) -> Result<String> {
    if label.trim().is_empty() {
        return Err(ShortpathError::invalid_input("node labels must not be empty"));
    }
    Ok(label.to_string())
}
