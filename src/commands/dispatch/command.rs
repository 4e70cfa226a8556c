//! Command trait and context for dispatching commands

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands::{check, helpers, paths, render, sample};
use shortpath_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("shortpath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Single-source shortest paths over weighted graphs.");
        println!();
        println!("Run `shortpath --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let cli = ctx.cli;
        let result = match self {
            Commands::Paths { input, trace } => {
                let loaded = helpers::load_graph(input)?;
                debug!(elapsed = ?ctx.start.elapsed(), "load_graph");
                paths::execute(cli, &loaded.graph, loaded.require_source()?, *trace)
            }
            Commands::Render { input, output } => {
                let loaded = helpers::load_graph(input)?;
                debug!(elapsed = ?ctx.start.elapsed(), "load_graph");
                render::execute(
                    cli,
                    &loaded.graph,
                    loaded.require_source()?,
                    output.as_deref(),
                )
            }
            Commands::Check { input } => {
                let loaded = helpers::load_graph(input)?;
                debug!(elapsed = ?ctx.start.elapsed(), "load_graph");
                check::execute(cli, &loaded.graph, loaded.source.as_ref())
            }
            Commands::Sample { output } => sample::execute(cli, output.as_deref()),
        };

        debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        result
    }
}
