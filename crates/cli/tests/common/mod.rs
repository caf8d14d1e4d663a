//! Shared test utilities for devkit integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that ignores host `DEVKIT_*` settings.
//! - Write configuration fixtures into temporary directories.
//!
//! Invariants / Assumptions:
//! - Logging is forced to `error` so stderr only carries diagnostics.

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Returns a hermetic `devkit` command for integration testing.
pub fn devkit_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("devkit");

    cmd.env("DEVKIT_LOG_LEVEL", "error");
    cmd.env_remove("RUST_LOG")
        .env_remove("DEVKIT_LOG_FORMAT")
        .env_remove("DEVKIT_ENV_FILE")
        .env_remove("DEVKIT_JSON_FILE")
        .env_remove("DEVKIT_YAML_FILE")
        .env_remove("DEVKIT_TOML_FILE")
        .env_remove("DEVKIT_PREFIX");

    cmd
}

/// Write `content` to `dir/name` and return the full path.
#[allow(dead_code)]
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("failed to write fixture");
    path
}
