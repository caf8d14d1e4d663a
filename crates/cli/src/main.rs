//! Devkit CLI - layered configuration inspection and small developer helpers.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Initialize logging from the environment before any work starts.
//! - Dispatch to the config, slug and average commands.
//!
//! Does NOT handle:
//! - Configuration merging itself (see `crates/config`).
//!
//! Invariants:
//! - Data goes to stdout; logs and diagnostics go to stderr.
//! - Every failure maps to a structured `ExitCode`.

mod args;
mod commands;
mod config_context;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = devkit_utils::init_from_env() {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
