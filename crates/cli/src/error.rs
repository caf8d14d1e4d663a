//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map library errors found in an `anyhow` chain to exit codes.
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use devkit_config::{CoercionError, ConfigError};
use devkit_utils::MathError;
use thiserror::Error;

/// Errors raised by the CLI itself.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Key not found: {0}")]
    KeyNotFound(String),
}

/// Structured exit codes for devkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// A configuration source exists but could not be read or parsed.
    ///
    /// Scripts should fix the file; retrying will not help.
    ConfigurationError = 2,

    /// The requested configuration key is not defined by any source.
    NotFound = 4,

    /// A value could not be converted, or an argument was out of range.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ConfigurationError;
            }
            if let Some(CliError::KeyNotFound(_)) = cause.downcast_ref::<CliError>() {
                return ExitCode::NotFound;
            }
            if cause.downcast_ref::<CoercionError>().is_some()
                || cause.downcast_ref::<MathError>().is_some()
            {
                return ExitCode::ValidationError;
            }
        }

        ExitCode::GeneralError
    }
}
