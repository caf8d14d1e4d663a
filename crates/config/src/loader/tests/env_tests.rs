//! Tests that read the real process environment.
//!
//! Invariants:
//! - Every test is `#[serial]` and scopes its variables with `temp_env`.

use serial_test::serial;
use tempfile::TempDir;

use super::write_source;
use crate::loader::{ConfigLoader, SourceKind, SourceOutcome, StaticEnv};

#[test]
#[serial]
fn test_process_environment_is_read_by_default() {
    temp_env::with_vars(
        [
            ("_DEVKIT_TEST_PORT", Some("8080")),
            ("_DEVKIT_TEST_DEBUG", Some("yes")),
        ],
        || {
            let config = ConfigLoader::builder()
                .with_prefix("_DEVKIT_TEST_")
                .build()
                .unwrap();

            assert_eq!(config.get_int("_DEVKIT_TEST_PORT"), Ok(Some(8080)));
            assert_eq!(config.get_bool("_DEVKIT_TEST_DEBUG"), Ok(Some(true)));
            assert_eq!(config.len(), 2);
            assert_eq!(config.origin("_DEVKIT_TEST_PORT"), Some(SourceKind::Environment));
        },
    );
}

#[test]
#[serial]
fn test_environment_is_frozen_at_construction() {
    temp_env::with_vars([("_DEVKIT_TEST_FROZEN", Some("before"))], || {
        let config = ConfigLoader::builder()
            .with_prefix("_DEVKIT_TEST_")
            .build()
            .unwrap();

        temp_env::with_vars([("_DEVKIT_TEST_FROZEN", Some("after"))], || {
            assert_eq!(config.get("_DEVKIT_TEST_FROZEN"), Some("before"));
        });
    });
}

#[test]
#[serial]
fn test_without_environment_ignores_process_variables() {
    temp_env::with_vars([("_DEVKIT_TEST_IGNORED", Some("1"))], || {
        let config = ConfigLoader::builder().without_environment().build().unwrap();

        assert!(!config.contains("_DEVKIT_TEST_IGNORED"));
        assert!(config.sources().is_empty());
    });
}

#[test]
#[serial]
fn test_environment_report_counts_variables_before_prefix_filter() {
    temp_env::with_vars([("_DEVKIT_TEST_COUNTED", Some("1"))], || {
        let config = ConfigLoader::builder()
            .with_prefix("_DEVKIT_TEST_COUNTED")
            .build()
            .unwrap();

        match config.sources()[0].outcome {
            SourceOutcome::Loaded { keys } => assert!(keys >= 1),
            SourceOutcome::Skipped => panic!("environment is never skipped"),
        }
        assert_eq!(config.len(), 1);
    });
}

#[test]
#[serial]
fn test_dotenv_expansion_reads_process_environment_even_without_environment_source() {
    let temp_dir = TempDir::new().unwrap();
    let env_file = write_source(
        &temp_dir,
        ".env",
        "_DEVKIT_TEST_URL=https://${_DEVKIT_TEST_HOST}/api\n",
    );

    temp_env::with_vars([("_DEVKIT_TEST_HOST", Some("process.example"))], || {
        let excluded = ConfigLoader::builder()
            .without_environment()
            .with_env_file(&env_file)
            .build()
            .unwrap();
        assert_eq!(
            excluded.get("_DEVKIT_TEST_URL"),
            Some("https://process.example/api")
        );
        assert!(!excluded.contains("_DEVKIT_TEST_HOST"));

        let injected = ConfigLoader::builder()
            .with_env_provider(StaticEnv::new().with_var("_DEVKIT_TEST_HOST", "static.example"))
            .with_env_file(&env_file)
            .build()
            .unwrap();
        assert_eq!(
            injected.get("_DEVKIT_TEST_URL"),
            Some("https://process.example/api")
        );
        assert_eq!(injected.get("_DEVKIT_TEST_HOST"), Some("static.example"));
    });
}

#[test]
#[serial]
fn test_dotenv_expansion_falls_back_to_earlier_keys_in_the_file() {
    let temp_dir = TempDir::new().unwrap();
    let env_file = write_source(
        &temp_dir,
        ".env",
        "_DEVKIT_TEST_BASE=/srv\n_DEVKIT_TEST_DATA=${_DEVKIT_TEST_BASE}/data\n",
    );

    temp_env::with_vars([("_DEVKIT_TEST_BASE", None::<&str>)], || {
        let config = ConfigLoader::builder()
            .without_environment()
            .with_env_file(&env_file)
            .build()
            .unwrap();
        assert_eq!(config.get("_DEVKIT_TEST_DATA"), Some("/srv/data"));
    });
}
