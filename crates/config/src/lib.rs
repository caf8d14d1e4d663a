//! Layered configuration loading for devkit.
//!
//! This crate merges environment variables, `.env` files and JSON, YAML and
//! TOML documents into a single immutable key/value snapshot with typed,
//! fail-soft accessors.

pub mod constants;
mod loader;

pub use loader::{
    CoercionError, ConfigError, ConfigLoader, ConfigLoaderBuilder, EnvProvider, FileFormat,
    ProcessEnv, SourceDescriptor, SourceKind, SourceOutcome, SourceReport, StaticEnv, ValueType,
};
