//! Loader construction from CLI arguments.
//!
//! Blank paths and prefixes (e.g. `DEVKIT_JSON_FILE=""`) are treated as unset.

use anyhow::{Context, Result};
use devkit_config::{ConfigLoader, ConfigLoaderBuilder};
use std::path::{Path, PathBuf};

use crate::args::Cli;

fn non_blank_path(path: Option<&PathBuf>) -> Option<&Path> {
    path.map(PathBuf::as_path)
        .filter(|p| !p.to_string_lossy().trim().is_empty())
}

/// Translate CLI flags into a loader builder without reading anything.
pub fn loader_builder(cli: &Cli) -> ConfigLoaderBuilder {
    let mut builder = ConfigLoader::builder();

    if let Some(path) = non_blank_path(cli.env_file.as_ref()) {
        builder = builder.with_env_file(path);
    }
    if let Some(path) = non_blank_path(cli.json_file.as_ref()) {
        builder = builder.with_json_file(path);
    }
    if let Some(path) = non_blank_path(cli.yaml_file.as_ref()) {
        builder = builder.with_yaml_file(path);
    }
    if let Some(path) = non_blank_path(cli.toml_file.as_ref()) {
        builder = builder.with_toml_file(path);
    }
    if let Some(prefix) = cli.prefix.as_deref().filter(|p| !p.trim().is_empty()) {
        builder = builder.with_prefix(prefix);
    }
    if cli.no_env {
        builder = builder.without_environment();
    }

    builder
}

/// Build the merged configuration for the current invocation.
pub fn load(cli: &Cli) -> Result<ConfigLoader> {
    let builder = loader_builder(cli);
    devkit_utils::timed("load configuration", || builder.build())
        .context("Failed to load configuration")
}
