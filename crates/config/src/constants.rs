//! Centralized constants for the configuration loader.

// =============================================================================
// Key Flattening
// =============================================================================

/// Separator used when flattening nested tables into dotted keys.
///
/// `{"db": {"port": 5432}}` becomes `db.port`.
pub const KEY_SEPARATOR: &str = ".";

// =============================================================================
// Boolean Coercion Vocabulary
// =============================================================================

/// Literals accepted as `true` by `ConfigLoader::get_bool` (case-insensitive).
pub const TRUTHY_VALUES: &[&str] = &["true", "1", "yes", "y", "on"];

/// Literals accepted as `false` by `ConfigLoader::get_bool` (case-insensitive).
pub const FALSY_VALUES: &[&str] = &["false", "0", "no", "n", "off"];

// =============================================================================
// Source Option Names
// =============================================================================

/// Option name of the dotenv source, as surfaced in errors and reports.
pub const ENV_FILE_OPTION: &str = "env_file";

/// Option name of the JSON source.
pub const JSON_FILE_OPTION: &str = "json_file";

/// Option name of the YAML source.
pub const YAML_FILE_OPTION: &str = "yaml_file";

/// Option name of the TOML source.
pub const TOML_FILE_OPTION: &str = "toml_file";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_vocabularies_are_disjoint_and_lowercase() {
        for value in TRUTHY_VALUES {
            assert!(!FALSY_VALUES.contains(value), "{value} is both truthy and falsy");
            assert_eq!(*value, value.to_ascii_lowercase());
        }
        for value in FALSY_VALUES {
            assert_eq!(*value, value.to_ascii_lowercase());
        }
    }
}
