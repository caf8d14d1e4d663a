//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read configuration source locations from flags or `DEVKIT_*` variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not build the loader (see `config_context` module).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "devkit")]
#[command(about = "Devkit - layered configuration and small developer helpers", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  devkit --env-file .env --json-file config.json --prefix APP_ config show\n  devkit --prefix APP_ config get APP_PORT --type int\n  devkit config sources\n  devkit slug Hello World\n  devkit average --window 3 1 2 3 4 5\n"
)]
pub struct Cli {
    /// Dotenv-style file (KEY=VALUE lines); skipped if absent
    #[arg(long, global = true, env = "DEVKIT_ENV_FILE", value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// JSON configuration file; skipped if absent
    #[arg(long, global = true, env = "DEVKIT_JSON_FILE", value_name = "FILE")]
    pub json_file: Option<PathBuf>,

    /// YAML configuration file; skipped if absent
    #[arg(long, global = true, env = "DEVKIT_YAML_FILE", value_name = "FILE")]
    pub yaml_file: Option<PathBuf>,

    /// TOML configuration file; skipped if absent
    #[arg(long, global = true, env = "DEVKIT_TOML_FILE", value_name = "FILE")]
    pub toml_file: Option<PathBuf>,

    /// Keep only keys starting with this prefix
    #[arg(long, global = true, env = "DEVKIT_PREFIX")]
    pub prefix: Option<String>,

    /// Do not read process environment variables as a configuration source
    #[arg(long, global = true)]
    pub no_env: bool,

    /// Output format (table, json, yaml)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect the merged configuration
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommand,
    },

    /// Convert text into a URL-friendly slug
    Slug {
        /// Words to slugify (joined with spaces)
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Compute a trailing moving average
    Average {
        /// Number of values per window
        #[arg(short, long)]
        window: usize,

        /// Input values
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
}
