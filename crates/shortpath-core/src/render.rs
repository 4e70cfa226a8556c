//! Graphviz rendering of a graph with its shortest paths highlighted
//!
//! Produces an undirected DOT document: every edge appears once, labelled
//! with its weight, and edges lying on a shortest path from the source are
//! drawn red. The renderer only reads the engine's output.

use std::collections::HashSet;
use std::fmt::{self, Display};
use std::hash::Hash;

use crate::graph::{Graph, ShortestPaths};

const NODE_STYLE: &str = "shape=circle, style=filled, fillcolor=lightblue";
const SOURCE_FILL: &str = "gold";
const PATH_STYLE: &str = "color=red, penwidth=2";

fn escape(value: impl Display) -> String {
    value
        .to_string()
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
}

/// Unordered pair of node positions
fn edge_key(a: usize, b: usize) -> (usize, usize) {
    (a.min(b), a.max(b))
}

/// Edges used by any non-trivial path in `result`
fn highlighted_edges<N>(graph: &Graph<N>, result: &ShortestPaths<N>) -> HashSet<(usize, usize)>
where
    N: Clone + Eq + Hash,
{
    let mut highlighted = HashSet::new();
    for (node, _) in result.paths() {
        if node == result.source() {
            continue;
        }
        for (from, to) in result.path_edges(node) {
            if let (Some(a), Some(b)) = (graph.position(from), graph.position(to)) {
                highlighted.insert(edge_key(a, b));
            }
        }
    }
    highlighted
}

/// Render `graph` as DOT, highlighting the edges of every path in `result`
pub fn to_dot<N>(graph: &Graph<N>, result: &ShortestPaths<N>) -> String
where
    N: Clone + Eq + Hash + Display,
{
    let mut dot = String::new();
    // Writing to a String cannot fail
    let _ = write_dot(&mut dot, graph, result);
    dot
}

/// Write the DOT document for `graph` and `result` to `out`
pub fn write_dot<N, W>(out: &mut W, graph: &Graph<N>, result: &ShortestPaths<N>) -> fmt::Result
where
    N: Clone + Eq + Hash + Display,
    W: fmt::Write,
{
    let highlighted = highlighted_edges(graph, result);

    writeln!(out, "graph shortest_paths {{")?;
    writeln!(
        out,
        "  label=\"Shortest paths from '{}'\";",
        escape(result.source())
    )?;
    writeln!(out, "  labelloc=t;")?;
    writeln!(out, "  node [{}];", NODE_STYLE)?;

    for node in graph.nodes() {
        if node == result.source() {
            writeln!(out, "  \"{}\" [fillcolor={}];", escape(node), SOURCE_FILL)?;
        } else {
            writeln!(out, "  \"{}\";", escape(node))?;
        }
    }

    let mut drawn = HashSet::new();
    for (from, to, weight) in graph.arcs() {
        let (Some(a), Some(b)) = (graph.position(from), graph.position(to)) else {
            continue;
        };
        let key = edge_key(a, b);
        if !drawn.insert(key) {
            continue;
        }

        let style = if highlighted.contains(&key) {
            format!(", {}", PATH_STYLE)
        } else {
            String::new()
        };
        writeln!(
            out,
            "  \"{}\" -- \"{}\" [label=\"{}\"{}];",
            escape(from),
            escape(to),
            weight,
            style
        )?;
    }

    writeln!(out, "}}")
}
