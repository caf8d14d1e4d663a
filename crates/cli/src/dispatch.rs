//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Resolve the output format once for every command.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::config_context;
use crate::formatters::OutputFormat;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.output.parse()?;

    match &cli.command {
        Commands::Config { command } => {
            let config = config_context::load(&cli)?;
            commands::config::run(&config, command, format)?;
        }
        Commands::Slug { words } => {
            commands::slug::run(words, format)?;
        }
        Commands::Average { window, values } => {
            commands::average::run(values, *window, format)?;
        }
    }

    Ok(())
}
