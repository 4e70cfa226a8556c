use std::fmt::Display;
use std::hash::Hash;
use std::io::Write;

use super::Report;
use crate::error::Result;
use crate::graph::TraceEvent;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

fn quoted(value: impl Display) -> String {
    format!("\"{}\"", escape_quotes(&value.to_string()))
}

/// Write the report as line-oriented records.
///
/// - `H` header with source and counts
/// - `T` one per trace event (only when tracing was requested)
/// - `D` distance per node
/// - `P` path per reachable node
pub fn write_records<N, W>(out: &mut W, report: &Report<'_, N>) -> Result<()>
where
    N: Clone + Eq + Hash + Display,
    W: Write,
{
    let result = report.result;

    writeln!(
        out,
        "H shortpath=1 records=1 mode=paths source={} nodes={} reachable={}",
        quoted(result.source()),
        result.distances().count(),
        result.reachable_count()
    )?;

    for event in report.trace.unwrap_or_default() {
        match event {
            TraceEvent::Processing { node, distance } => {
                writeln!(out, "T processing node={} distance={}", quoted(node), distance)?
            }
            TraceEvent::Updated {
                node,
                previous_distance,
                new_distance,
            } => writeln!(
                out,
                "T updated node={} previous={} distance={}",
                quoted(node),
                previous_distance,
                new_distance
            )?,
        }
    }

    for (node, distance) in result.distances() {
        writeln!(out, "D node={} distance={}", quoted(node), distance)?;
    }

    for (node, path) in result.paths() {
        let joined = path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ");
        writeln!(
            out,
            "P node={} hops={} path={}",
            quoted(node),
            path.len() - 1,
            quoted(joined)
        )?;
    }

    Ok(())
}
