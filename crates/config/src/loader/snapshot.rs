//! The merged, immutable configuration snapshot.
//!
//! Responsibilities:
//! - Hold the merged key/value mapping and the provenance of each value.
//! - Provide exact-key lookups and typed accessors.
//!
//! Does NOT handle:
//! - Reading or merging sources (see builder.rs).
//!
//! Invariants:
//! - The mapping never changes after construction.
//! - Lookups of missing keys return `None`, never an error.
//! - Typed accessors fail only when the key exists and its value does not convert.

use std::collections::BTreeMap;

use super::builder::ConfigLoaderBuilder;
use super::coerce::{parse_bool, parse_float, parse_int};
use super::error::CoercionError;
use super::source::{SourceKind, SourceReport};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    value: String,
    origin: SourceKind,
}

/// A merged view over every configured source.
///
/// Built with [`ConfigLoader::builder`]. Cheap to clone and safe to share
/// between threads; nothing is re-read after construction.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    sources: Vec<SourceReport>,
    prefix: Option<String>,
    entries: BTreeMap<String, Entry>,
}

impl ConfigLoader {
    /// Start configuring a loader.
    pub fn builder() -> ConfigLoaderBuilder {
        ConfigLoaderBuilder::new()
    }

    pub(crate) fn from_layers(
        sources: Vec<SourceReport>,
        prefix: Option<String>,
        layers: Vec<(SourceKind, Vec<(String, String)>)>,
    ) -> Self {
        let mut entries = BTreeMap::new();
        for (origin, layer) in layers {
            for (key, value) in layer {
                entries.insert(key, Entry { value, origin });
            }
        }
        if let Some(prefix) = prefix.as_deref() {
            entries.retain(|key, _| key.starts_with(prefix));
        }

        Self {
            sources,
            prefix,
            entries,
        }
    }

    /// Raw value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|entry| entry.value.as_str())
    }

    /// Value of `key` as a signed integer.
    ///
    /// Returns `Ok(None)` when the key is missing and an error when the value
    /// is not an integer literal.
    pub fn get_int(&self, key: &str) -> Result<Option<i64>, CoercionError> {
        self.get(key).map(|raw| parse_int(key, raw)).transpose()
    }

    /// Value of `key` as a boolean, using the vocabulary in
    /// [`crate::constants::TRUTHY_VALUES`] and [`crate::constants::FALSY_VALUES`].
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, CoercionError> {
        self.get(key).map(|raw| parse_bool(key, raw)).transpose()
    }

    /// Value of `key` as a float.
    pub fn get_float(&self, key: &str) -> Result<Option<f64>, CoercionError> {
        self.get(key).map(|raw| parse_float(key, raw)).transpose()
    }

    /// Which source supplied the value of `key`.
    pub fn origin(&self, key: &str) -> Option<SourceKind> {
        self.entries.get(key).map(|entry| entry.origin)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy of the full merged mapping.
    pub fn as_dict(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.clone(), entry.value.clone()))
            .collect()
    }

    /// Every configured source, in merge order, with its outcome.
    pub fn sources(&self) -> &[SourceReport] {
        &self.sources
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
}
