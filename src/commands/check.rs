//! `shortpath check` command - validate a graph without computing paths

use crate::cli::Cli;
use crate::output_by_format;
use shortpath_core::error::Result;
use shortpath_core::graph::{validate, validate_graph, Graph};
use shortpath_core::report::records::escape_quotes;

/// Execute the check command
pub fn execute(cli: &Cli, graph: &Graph<String>, source: Option<&String>) -> Result<()> {
    match source {
        Some(source) => validate(graph, source)?,
        None => validate_graph(graph)?,
    }

    let nodes = graph.node_count();
    let arcs = graph.arc_count();

    output_by_format!(cli.format,
        json => {
            println!(
                "{}",
                serde_json::json!({
                    "ok": true,
                    "nodes": nodes,
                    "arcs": arcs,
                    "source": source,
                })
            );
        },
        human => {
            if !cli.quiet {
                match source {
                    Some(source) => {
                        println!("ok: {} nodes, {} arcs, source '{}'", nodes, arcs, source)
                    }
                    None => println!("ok: {} nodes, {} arcs", nodes, arcs),
                }
            }
        },
        records => {
            let source = source
                .map(|s| format!(" source=\"{}\"", escape_quotes(s)))
                .unwrap_or_default();
            println!(
                "H shortpath=1 records=1 mode=check ok=true nodes={} arcs={}{}",
                nodes, arcs, source
            );
        }
    );

    Ok(())
}
