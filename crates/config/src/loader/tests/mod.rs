//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test precedence between every pair of sources.
//! - Test prefix filtering, typed accessors and source reports.
//! - Test handling of missing, unreadable and malformed files.
//!
//! Invariants:
//! - Tests inject `StaticEnv` instead of touching the process environment,
//!   except in env_tests.rs which serializes with `serial_test`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub mod env_tests;

/// Write `content` to `name` inside `dir` and return the path.
pub fn write_source(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write source file");
    path
}
