//! Shortpath - single-source shortest paths CLI
//!
//! Loads a small weighted graph (or the built-in sample), runs Dijkstra from
//! a source node, and reports distances, paths, the relaxation trace, or a
//! Graphviz rendering.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use shortpath_core::error::{ExitCode as ShortpathExitCode, Result, ShortpathError};
use shortpath_core::logging;
use shortpath_core::report::records::escape_quotes;

fn main() -> ExitCode {
    let start = Instant::now();
    let args: Vec<String> = env::args().collect();

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err, &args),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let outcome = commands::dispatch::run(&cli, start);
    tracing::debug!(elapsed = ?start.elapsed(), ok = outcome.is_ok(), "run");

    finish(&cli, outcome)
}

/// Every recognisable `--format` value on the raw command line.
///
/// Used only when clap rejects the arguments and `Cli.format` never gets
/// built; unknown values are skipped.
fn requested_formats(args: &[String]) -> Vec<OutputFormat> {
    let mut formats = Vec::new();
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        let value = if arg == "--format" {
            rest.next().map(String::as_str)
        } else {
            arg.strip_prefix("--format=")
        };
        if let Some(format) = value.and_then(|v| v.parse().ok()) {
            formats.push(format);
        }
    }
    formats
}

/// Report a clap rejection. Help and version always go through clap; any
/// other error becomes a JSON envelope when JSON output was asked for.
fn parse_failure(err: clap::Error, args: &[String]) -> ExitCode {
    let informational = matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
    if informational || !requested_formats(args).contains(&OutputFormat::Json) {
        err.exit();
    }

    let error = match err.kind() {
        ErrorKind::Io | ErrorKind::Format => ShortpathError::failed("parse arguments", &err),
        // Includes a repeated `--format`
        _ => {
            let rendered = err.to_string();
            let first_line = rendered.lines().next().unwrap_or_default();
            ShortpathError::UsageError(first_line.trim_start_matches("error: ").to_string())
        }
    };
    eprintln!("{}", error.to_json());
    ExitCode::from(error.exit_code() as u8)
}

/// Map the command outcome to an exit code, reporting any error on stderr
/// in the selected format.
fn finish(cli: &Cli, outcome: Result<()>) -> ExitCode {
    let Err(e) = outcome else {
        return ExitCode::from(ShortpathExitCode::Success as u8);
    };

    output_by_format!(cli.format,
        json => { eprintln!("{}", e.to_json()) },
        human => {
            if !cli.quiet {
                eprintln!("error: {}", e);
            }
        },
        records => {
            if !cli.quiet {
                eprintln!(
                    "E code={} type={} message=\"{}\"",
                    e.exit_code() as i32,
                    e.error_type(),
                    escape_quotes(&e.to_string())
                );
            }
        }
    );

    ExitCode::from(e.exit_code() as u8)
}
