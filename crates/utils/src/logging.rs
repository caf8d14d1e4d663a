//! Environment-driven logging initialization.
//!
//! This module installs a `tracing-subscriber` registry configured from
//! environment variables, so binaries share one logging setup.
//!
//! # Usage
//!
//! ```rust,ignore
//! use devkit_utils::logging::LoggingConfig;
//!
//! let config = LoggingConfig::from_env()?;
//! config.init()?;
//! tracing::info!("ready");
//! ```
//!
//! Resolution order for the filter directive: `RUST_LOG`, then
//! `DEVKIT_LOG_LEVEL`, then `info`. Blank values count as unset.

use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive variable understood by `tracing-subscriber` itself.
pub const RUST_LOG_ENV: &str = "RUST_LOG";

/// Log level (or full filter directive) for devkit binaries.
pub const LOG_LEVEL_ENV: &str = "DEVKIT_LOG_LEVEL";

/// Output format: `text` or `json`.
pub const LOG_FORMAT_ENV: &str = "DEVKIT_LOG_FORMAT";

/// Filter used when no variable is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors from logging setup.
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log format '{0}'. Valid options: text, json")]
    InvalidFormat(String),

    #[error("Invalid log filter '{filter}': {message}")]
    InvalidFilter { filter: String, message: String },

    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" | "plain" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(LoggingError::InvalidFormat(s.to_string())),
        }
    }
}

/// Configuration for the global subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `devkit_config=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, LoggingError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration against an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LoggingError> {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let filter = non_blank(RUST_LOG_ENV)
            .or_else(|| non_blank(LOG_LEVEL_ENV))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let format = non_blank(LOG_FORMAT_ENV)
            .map(|value| value.parse::<LogFormat>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self { filter, format })
    }

    /// Builder method to set the filter directive.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Builder method to set the output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Parse the filter directive.
    pub fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        EnvFilter::try_new(&self.filter).map_err(|e| LoggingError::InvalidFilter {
            filter: self.filter.clone(),
            message: e.to_string(),
        })
    }

    /// Install the global subscriber. Logs are written to stderr.
    ///
    /// # Errors
    /// Returns an error if the filter is invalid or a subscriber is already set.
    pub fn init(&self) -> Result<(), LoggingError> {
        use tracing_subscriber::fmt;

        let registry = tracing_subscriber::registry().with(self.env_filter()?);
        let result = match self.format {
            LogFormat::Text => registry
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init(),
            LogFormat::Json => registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init(),
        };

        result.map_err(|_| LoggingError::AlreadyInitialized)
    }
}

/// Configure logging from the environment and install it.
pub fn init_from_env() -> Result<LoggingConfig, LoggingError> {
    let config = LoggingConfig::from_env()?;
    config.init()?;
    Ok(config)
}
