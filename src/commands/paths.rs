//! `shortpath paths` command - compute and report shortest paths

use std::io::{self, Write};
use std::time::Instant;

use crate::cli::Cli;
use crate::output_by_format;
use shortpath_core::error::Result;
use shortpath_core::graph::{compute, compute_traced, Graph};
use shortpath_core::report::{write_human, write_json, write_records, Report};
use shortpath_core::trace_time;

/// Execute the paths command
pub fn execute(cli: &Cli, graph: &Graph<String>, source: &String, trace: bool) -> Result<()> {
    let start = Instant::now();

    let (result, events) = if trace {
        compute_traced(graph, source)?
    } else {
        (compute(graph, source)?, Vec::new())
    };

    trace_time!(start, "compute", events = events.len());

    let mut report = Report::new(&result);
    if trace {
        report = report.with_trace(&events);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output_by_format!(cli.format,
        json => { write_json(&mut out, &report)? },
        human => { write_human(&mut out, &report)? },
        records => { write_records(&mut out, &report)? }
    );
    out.flush()?;

    Ok(())
}
