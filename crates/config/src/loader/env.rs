//! Environment variable providers.
//!
//! Responsibilities:
//! - Abstract the process environment behind `EnvProvider` so callers and tests
//!   can substitute a fixed mapping.
//!
//! Does NOT handle:
//! - `.env` file parsing (see formats.rs).
//!
//! Invariants:
//! - Providers only read; nothing here mutates the process environment.
//! - Variables whose name or value is not valid UTF-8 are skipped.

use std::collections::BTreeMap;

/// A source of environment variables.
pub trait EnvProvider: Send + Sync {
    /// Snapshot of every variable visible to this provider.
    fn vars(&self) -> Vec<(String, String)>;
}

/// Reads the real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn vars(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }
}

/// A fixed set of variables, typically used in tests.
#[derive(Debug, Default, Clone)]
pub struct StaticEnv {
    vars: BTreeMap<String, String>,
}

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one variable.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for StaticEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl EnvProvider for StaticEnv {
    fn vars(&self) -> Vec<(String, String)> {
        self.vars
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_static_env_returns_exactly_its_vars() {
        let env = StaticEnv::new().with_var("A", "1").with_var("B", "2").with_var("A", "3");
        assert_eq!(
            env.vars(),
            vec![
                ("A".to_string(), "3".to_string()),
                ("B".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn test_static_env_from_iterator() {
        let env: StaticEnv = [("X", "1"), ("Y", "2")].into_iter().collect();
        assert_eq!(env.vars().len(), 2);
    }

    #[test]
    #[serial]
    fn test_process_env_sees_current_variables() {
        let key = "_DEVKIT_TEST_PROCESS_ENV";
        temp_env::with_vars([(key, Some("visible"))], || {
            let vars = ProcessEnv.vars();
            assert!(
                vars.iter().any(|(k, v)| k == key && v == "visible"),
                "ProcessEnv should expose variables set in the process"
            );
        });
    }
}
