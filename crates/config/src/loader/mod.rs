//! Configuration loader for environment variables and files.
//!
//! Responsibilities:
//! - Read the process environment, a `.env` file and JSON, YAML and TOML files.
//! - Merge them in a fixed precedence order into one immutable snapshot.
//! - Restrict the snapshot to keys carrying a configured prefix.
//! - Provide typed accessors that coerce raw string values on demand.
//!
//! Does NOT handle:
//! - Writing configuration back to disk.
//! - Watching sources for changes after construction.
//! - Exporting `.env` values into the process environment.
//!
//! Invariants / Assumptions:
//! - Precedence is environment < `.env` < JSON < YAML < TOML; the last source applied wins.
//! - Absent files are skipped; present but malformed files abort construction.
//! - Coercion errors surface only from the accessor that triggered them.
//! - The prefix filter keeps the original, unstripped key.

mod builder;
mod coerce;
mod env;
mod error;
mod flatten;
mod formats;
mod snapshot;
mod source;

pub use builder::ConfigLoaderBuilder;
pub use coerce::ValueType;
pub use env::{EnvProvider, ProcessEnv, StaticEnv};
pub use error::{CoercionError, ConfigError};
pub use snapshot::ConfigLoader;
pub use source::{FileFormat, SourceDescriptor, SourceKind, SourceOutcome, SourceReport};

#[cfg(test)]
mod tests;
