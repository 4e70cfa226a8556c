//! `shortpath sample` command - print or save the built-in sample graph

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use crate::output_by_format;
use shortpath_core::config::GraphFile;
use shortpath_core::error::Result;
use shortpath_core::report::records::escape_quotes;

/// Execute the sample command.
///
/// Without `--output`, prints TOML that `--graph` accepts back (JSON with
/// `--format json`). With `--output`, saves the graph in the format named
/// by the file extension.
pub fn execute(cli: &Cli, output: Option<&Path>) -> Result<()> {
    let sample = GraphFile::sample();

    let Some(path) = output else {
        if cli.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&sample)?);
        } else {
            print!("{}", sample.to_toml()?);
        }
        return Ok(());
    };

    sample.save(path)?;

    output_by_format!(cli.format,
        json => {
            println!(
                "{}",
                serde_json::json!({
                    "output": path.display().to_string(),
                    "edges": sample.edges.len(),
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
                "H shortpath=1 records=1 mode=sample edges={} output=\"{}\"",
                sample.edges.len(),
                escape_quotes(&path.display().to_string())
            );
        }
    );

    Ok(())
}
