//! Error types for configuration loading and value coercion.
//!
//! Responsibilities:
//! - Define the construction-time failures of `ConfigLoaderBuilder::build`.
//! - Define the access-time failure of the typed accessors.
//!
//! Does NOT handle:
//! - Missing sources, which are skipped rather than reported as errors.
//!
//! Invariants:
//! - Every construction error names the source format, its option name and path.
//! - Dotenv parse errors NEVER include raw `.env` line contents to prevent secret leakage.
//! - Coercion errors carry the key and the offending raw value.

use std::path::PathBuf;
use thiserror::Error;

use super::coerce::ValueType;
use super::source::FileFormat;

/// Errors that abort construction of a `ConfigLoader`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A present file failed to parse as its declared format.
    #[error("Failed to parse {format} source ({option}) at {location}: {message}", option = .format.option_name(), location = .path.display())]
    Parse {
        format: FileFormat,
        path: PathBuf,
        message: String,
    },

    /// A present structured file could not be read.
    #[error("Failed to read {format} source ({option}) at {location}: {source}", option = .format.option_name(), location = .path.display())]
    Read {
        format: FileFormat,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// The format of the source that failed.
    pub fn format(&self) -> FileFormat {
        match self {
            ConfigError::Parse { format, .. } | ConfigError::Read { format, .. } => *format,
        }
    }

    /// The path of the source that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConfigError::Parse { path, .. } | ConfigError::Read { path, .. } => path,
        }
    }
}

/// A stored value could not be converted to the requested type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot convert value {value:?} of key {key} to {target}")]
pub struct CoercionError {
    pub key: String,
    pub value: String,
    pub target: ValueType,
}
