//! Reading and parsing of file sources.
//!
//! Responsibilities:
//! - Read a source file, distinguishing absent files from unreadable ones.
//! - Dispatch parsing on `FileFormat` and return flat key/value entries.
//!
//! Invariants:
//! - Absent files are never an error.
//! - Unreadable `.env` files are skipped with a warning; unreadable structured files fail.
//! - A file that is present but not valid UTF-8 is a parse error for every format.
//! - Parse messages for `.env` files carry only the byte position of the failure.

use std::io::ErrorKind;
use std::path::Path;

use super::error::ConfigError;
use super::flatten::{Entries, flatten_root, toml_to_json, yaml_to_json};
use super::source::FileFormat;

/// Read a source file. `Ok(None)` means the source should be skipped.
pub(crate) fn read_document(
    format: FileFormat,
    path: &Path,
) -> Result<Option<String>, ConfigError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(
                %format,
                path = %path.display(),
                "Configuration source not found, skipping"
            );
            return Ok(None);
        }
        Err(e) if format == FileFormat::Dotenv => {
            tracing::warn!(
                path = %path.display(),
                kind = ?e.kind(),
                "Unreadable .env file, skipping"
            );
            return Ok(None);
        }
        Err(source) => {
            return Err(ConfigError::Read {
                format,
                path: path.to_path_buf(),
                source,
            });
        }
    };

    // Utf8Error reports only the byte offset, never the offending content.
    String::from_utf8(bytes)
        .map(Some)
        .map_err(|e| ConfigError::Parse {
            format,
            path: path.to_path_buf(),
            message: format!("invalid UTF-8: {}", e.utf8_error()),
        })
}

impl FileFormat {
    /// Parse a document of this format into flat entries.
    ///
    /// The error string describes the failure without the path; callers wrap
    /// it into `ConfigError::Parse`.
    pub(crate) fn parse(self, content: &str) -> Result<Entries, String> {
        match self {
            FileFormat::Dotenv => parse_dotenv(content),
            FileFormat::Json => {
                let value: serde_json::Value =
                    serde_json::from_str(content).map_err(|e| e.to_string())?;
                flatten_root(value)
            }
            FileFormat::Yaml => {
                let value: serde_yaml::Value =
                    serde_yaml::from_str(content).map_err(|e| e.to_string())?;
                // An empty YAML document deserializes to null.
                if value.is_null() {
                    return Ok(Vec::new());
                }
                flatten_root(yaml_to_json(value)?)
            }
            FileFormat::Toml => {
                let table: toml::Table =
                    toml::from_str(content).map_err(|e| e.message().to_string())?;
                flatten_root(toml_to_json(toml::Value::Table(table)))
            }
        }
    }
}

fn parse_dotenv(content: &str) -> Result<Entries, String> {
    dotenvy::from_read_iter(content.as_bytes())
        .map(|item| {
            item.map_err(|e| match e {
                dotenvy::Error::LineParse(_, idx) => format!("invalid syntax at position {idx}"),
                dotenvy::Error::Io(io_err) => format!("I/O error: {}", io_err.kind()),
                _ => "invalid dotenv content".to_string(),
            })
        })
        .collect()
}
