//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Collect source locations, the key prefix and the environment provider.
//! - Read and merge every source eagerly in `build()`.
//!
//! Does NOT handle:
//! - Parsing individual formats (see formats.rs).
//! - Lookups and coercion (see snapshot.rs).
//!
//! Invariants / Assumptions:
//! - Sources are applied in `SourceKind::PRECEDENCE` order; later sources win.
//! - The process environment is read through `ProcessEnv` unless another
//!   provider is injected or the environment is excluded.
//! - A parse failure aborts `build()`; no partial loader is returned.

use std::path::PathBuf;

use super::env::{EnvProvider, ProcessEnv};
use super::error::ConfigError;
use super::formats::read_document;
use super::snapshot::ConfigLoader;
use super::source::{FileFormat, SourceDescriptor, SourceKind, SourceOutcome, SourceReport};

/// Builder for [`ConfigLoader`].
pub struct ConfigLoaderBuilder {
    env_file: Option<PathBuf>,
    json_file: Option<PathBuf>,
    yaml_file: Option<PathBuf>,
    toml_file: Option<PathBuf>,
    prefix: Option<String>,
    env_provider: Option<Box<dyn EnvProvider>>,
    include_environment: bool,
}

impl Default for ConfigLoaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoaderBuilder {
    /// Create a builder that reads only the process environment.
    pub fn new() -> Self {
        Self {
            env_file: None,
            json_file: None,
            yaml_file: None,
            toml_file: None,
            prefix: None,
            env_provider: None,
            include_environment: true,
        }
    }

    /// Read a dotenv-style file. Absent or unreadable files are skipped.
    ///
    /// `${VAR}` references in the file are expanded while parsing. The
    /// expansion looks up the real process environment first and then keys
    /// defined earlier in the same file. It ignores [`Self::with_env_provider`]
    /// and [`Self::without_environment`].
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Read a JSON document. Absent files are skipped.
    pub fn with_json_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.json_file = Some(path.into());
        self
    }

    /// Read a YAML document. Absent files are skipped.
    pub fn with_yaml_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.yaml_file = Some(path.into());
        self
    }

    /// Read a TOML document. Absent files are skipped.
    pub fn with_toml_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.toml_file = Some(path.into());
        self
    }

    /// Keep only keys starting with `prefix`. Keys are stored unstripped.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Replace the process environment with another provider.
    ///
    /// Only the environment source is replaced; `${VAR}` expansion inside the
    /// `.env` file still reads the process environment.
    pub fn with_env_provider(mut self, provider: impl EnvProvider + 'static) -> Self {
        self.env_provider = Some(Box::new(provider));
        self.include_environment = true;
        self
    }

    /// Do not use environment variables as a configuration source.
    ///
    /// `${VAR}` expansion inside the `.env` file still reads the process
    /// environment.
    pub fn without_environment(mut self) -> Self {
        self.include_environment = false;
        self
    }

    fn file_path(&self, format: FileFormat) -> Option<&PathBuf> {
        match format {
            FileFormat::Dotenv => self.env_file.as_ref(),
            FileFormat::Json => self.json_file.as_ref(),
            FileFormat::Yaml => self.yaml_file.as_ref(),
            FileFormat::Toml => self.toml_file.as_ref(),
        }
    }

    /// The sources this builder will read, in merge order.
    pub fn descriptors(&self) -> Vec<SourceDescriptor> {
        SourceKind::PRECEDENCE
            .iter()
            .filter_map(|kind| match kind {
                SourceKind::Environment => self.include_environment.then_some(SourceDescriptor {
                    kind: *kind,
                    path: None,
                }),
                SourceKind::File(format) => self.file_path(*format).map(|path| SourceDescriptor {
                    kind: *kind,
                    path: Some(path.clone()),
                }),
            })
            .collect()
    }

    /// Read and merge every configured source.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A present file fails to parse as its format (`ConfigError::Parse`)
    /// - A present JSON, YAML or TOML file cannot be read (`ConfigError::Read`)
    pub fn build(self) -> Result<ConfigLoader, ConfigError> {
        let descriptors = self.descriptors();
        let mut reports = Vec::with_capacity(descriptors.len());
        let mut layers = Vec::with_capacity(descriptors.len());

        for descriptor in descriptors {
            let entries = match (descriptor.kind, descriptor.path.as_deref()) {
                (SourceKind::Environment, _) => {
                    let vars = match &self.env_provider {
                        Some(provider) => provider.vars(),
                        None => ProcessEnv.vars(),
                    };
                    Some(vars)
                }
                (SourceKind::File(format), Some(path)) => read_document(format, path)?
                    .map(|content| {
                        format.parse(&content).map_err(|message| ConfigError::Parse {
                            format,
                            path: path.to_path_buf(),
                            message,
                        })
                    })
                    .transpose()?,
                (SourceKind::File(_), None) => None,
            };

            let outcome = match entries {
                Some(entries) => {
                    tracing::debug!(
                        source = %descriptor.kind,
                        keys = entries.len(),
                        "Loaded configuration source"
                    );
                    let outcome = SourceOutcome::Loaded {
                        keys: entries.len(),
                    };
                    layers.push((descriptor.kind, entries));
                    outcome
                }
                None => SourceOutcome::Skipped,
            };
            reports.push(SourceReport {
                descriptor,
                outcome,
            });
        }

        let loader = ConfigLoader::from_layers(reports, self.prefix, layers);
        tracing::debug!(keys = loader.len(), prefix = ?loader.prefix(), "Configuration merged");
        Ok(loader)
    }
}
