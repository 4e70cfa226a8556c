use std::fmt::Display;
use std::hash::Hash;
use std::io::Write;

use serde::Serialize;
use serde_json::{json, Value};

use super::Report;
use crate::error::Result;

/// Build the JSON document for a report.
///
/// Infinite distances serialize as `null`, and unreachable nodes carry a
/// `null` path.
pub fn to_json<N>(report: &Report<'_, N>) -> Result<Value>
where
    N: Clone + Eq + Hash + Display + Serialize,
{
    let result = report.result;

    let nodes: Vec<Value> = result
        .distances()
        .map(|(node, distance)| {
            json!({
                "node": node,
                "distance": distance,
                "path": result.path(node),
            })
        })
        .collect();
    let unreachable: Vec<&N> = result.unreachable().collect();

    let mut doc = json!({
        "source": result.source(),
        "reachable": result.reachable_count(),
        "nodes": nodes,
        "unreachable": unreachable,
    });

    if let Some(trace) = report.trace {
        doc["trace"] = serde_json::to_value(trace)?;
    }

    Ok(doc)
}

/// Write the report as pretty-printed JSON
pub fn write_json<N, W>(out: &mut W, report: &Report<'_, N>) -> Result<()>
where
    N: Clone + Eq + Hash + Display + Serialize,
    W: Write,
{
    let doc = to_json(report)?;
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)?;
    Ok(())
}
