//! Source descriptors and the fixed precedence order.
//!
//! Responsibilities:
//! - Name every kind of configuration source and its position in the merge order.
//! - Describe configured sources and what happened when each was read.
//!
//! Invariants:
//! - `SourceKind` derives `Ord` so that sorting by kind yields merge order.
//! - `SourceKind::PRECEDENCE` is lowest priority first.

use std::fmt;
use std::path::PathBuf;

use crate::constants::{ENV_FILE_OPTION, JSON_FILE_OPTION, TOML_FILE_OPTION, YAML_FILE_OPTION};

/// File formats the loader can parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileFormat {
    Dotenv,
    Json,
    Yaml,
    Toml,
}

impl FileFormat {
    /// Name of the construction option that points at this format.
    pub const fn option_name(self) -> &'static str {
        match self {
            FileFormat::Dotenv => ENV_FILE_OPTION,
            FileFormat::Json => JSON_FILE_OPTION,
            FileFormat::Yaml => YAML_FILE_OPTION,
            FileFormat::Toml => TOML_FILE_OPTION,
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FileFormat::Dotenv => "dotenv",
            FileFormat::Json => "JSON",
            FileFormat::Yaml => "YAML",
            FileFormat::Toml => "TOML",
        };
        f.write_str(label)
    }
}

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceKind {
    Environment,
    File(FileFormat),
}

impl SourceKind {
    /// Every source kind, lowest precedence first.
    pub const PRECEDENCE: [SourceKind; 5] = [
        SourceKind::Environment,
        SourceKind::File(FileFormat::Dotenv),
        SourceKind::File(FileFormat::Json),
        SourceKind::File(FileFormat::Yaml),
        SourceKind::File(FileFormat::Toml),
    ];

    /// Position in the merge order; higher ranks override lower ones.
    pub fn rank(self) -> usize {
        Self::PRECEDENCE
            .iter()
            .position(|kind| *kind == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Environment => f.write_str("environment"),
            SourceKind::File(format) => write!(f, "{format}"),
        }
    }
}

/// A configured source: its kind and, for files, its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub kind: SourceKind,
    pub path: Option<PathBuf>,
}

/// What happened when a source was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceOutcome {
    /// The source was read and contributed `keys` entries before prefix filtering.
    Loaded { keys: usize },
    /// The source was absent (or an unreadable `.env` file) and contributed nothing.
    Skipped,
}

/// A configured source together with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub descriptor: SourceDescriptor,
    pub outcome: SourceOutcome,
}
