use std::fmt::Display;
use std::hash::Hash;
use std::io::Write;

use super::Report;
use crate::error::Result;

/// Write the report in human-readable form.
///
/// ```text
/// Starting from node 'R'
///
/// Processing node 'R' with cumulative distance: 0
///   Updating node 'E': previous distance inf, new distance 2
/// Calculation complete.
///
/// Shortest distances from 'R':
///   R: 0
///   E: 2
///
/// Shortest paths from 'R':
///   R: R
///   E: R -> E
/// ```
pub fn write_human<N, W>(out: &mut W, report: &Report<'_, N>) -> Result<()>
where
    N: Clone + Eq + Hash + Display,
    W: Write,
{
    let result = report.result;
    let source = result.source();

    if let Some(trace) = report.trace {
        writeln!(out, "Starting from node '{}'", source)?;
        writeln!(out)?;
        for event in trace {
            writeln!(out, "{}", event)?;
        }
        writeln!(out, "Calculation complete.")?;
        writeln!(out)?;
    }

    writeln!(out, "Shortest distances from '{}':", source)?;
    for (node, distance) in result.distances() {
        writeln!(out, "  {}: {}", node, distance)?;
    }

    writeln!(out)?;
    writeln!(out, "Shortest paths from '{}':", source)?;
    for (node, path) in result.paths() {
        let joined = path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ");
        writeln!(out, "  {}: {}", node, joined)?;
    }

    Ok(())
}
