//! `shortpath render` command - Graphviz DOT output

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::cli::Cli;
use crate::output_by_format;
use shortpath_core::error::Result;
use shortpath_core::graph::{compute, Graph};
use shortpath_core::render::to_dot;
use shortpath_core::report::records::escape_quotes;

/// Execute the render command.
///
/// Without `--output` the DOT document itself is the output, whatever the
/// format. With `--output` the document goes to the file and a short
/// confirmation is printed in the requested format.
pub fn execute(
    cli: &Cli,
    graph: &Graph<String>,
    source: &String,
    output: Option<&Path>,
) -> Result<()> {
    let result = compute(graph, source)?;
    let dot = to_dot(graph, &result);

    let Some(path) = output else {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        out.write_all(dot.as_bytes())?;
        out.flush()?;
        return Ok(());
    };

    fs::write(path, &dot)?;
    tracing::debug!(path = %path.display(), bytes = dot.len(), "write_dot");

    output_by_format!(cli.format,
        json => {
            println!(
                "{}",
                serde_json::json!({
                    "output": path.display().to_string(),
                    "source": source,
                    "nodes": graph.node_count(),
                    "reachable": result.reachable_count(),
                })
            );
        },
        human => {
            if !cli.quiet {
                println!("Wrote {}", path.display());
            }
        },
        records => {
            println!(
                "H shortpath=1 records=1 mode=render source=\"{}\" output=\"{}\"",
                escape_quotes(source),
                escape_quotes(&path.display().to_string())
            );
        }
    );

    Ok(())
}
