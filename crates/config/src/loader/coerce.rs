//! On-demand coercion of raw string values into typed values.
//!
//! All parsers trim surrounding whitespace before converting. Booleans use the
//! fixed vocabulary in `crate::constants`, compared case-insensitively.

use std::fmt;

use super::error::CoercionError;
use crate::constants::{FALSY_VALUES, TRUTHY_VALUES};

/// Target type of a coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Integer,
    Boolean,
    Float,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValueType::Integer => "integer",
            ValueType::Boolean => "boolean",
            ValueType::Float => "float",
        };
        f.write_str(label)
    }
}

fn coercion_error(key: &str, raw: &str, target: ValueType) -> CoercionError {
    CoercionError {
        key: key.to_string(),
        value: raw.to_string(),
        target,
    }
}

pub(crate) fn parse_int(key: &str, raw: &str) -> Result<i64, CoercionError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| coercion_error(key, raw, ValueType::Integer))
}

pub(crate) fn parse_bool(key: &str, raw: &str) -> Result<bool, CoercionError> {
    let normalized = raw.trim().to_ascii_lowercase();
    if TRUTHY_VALUES.contains(&normalized.as_str()) {
        Ok(true)
    } else if FALSY_VALUES.contains(&normalized.as_str()) {
        Ok(false)
    } else {
        Err(coercion_error(key, raw, ValueType::Boolean))
    }
}

pub(crate) fn parse_float(key: &str, raw: &str) -> Result<f64, CoercionError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| coercion_error(key, raw, ValueType::Float))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_accepts_signed_and_padded_literals() {
        assert_eq!(parse_int("k", "8080"), Ok(8080));
        assert_eq!(parse_int("k", " 42 "), Ok(42));
        assert_eq!(parse_int("k", "+7"), Ok(7));
        assert_eq!(parse_int("k", "-15"), Ok(-15));
    }

    #[test]
    fn test_parse_int_rejects_non_integers() {
        for raw in ["abc", "", "1.5", "12abc", "9223372036854775808"] {
            let err = parse_int("APP_PORT", raw).unwrap_err();
            assert_eq!(err.key, "APP_PORT");
            assert_eq!(err.value, raw);
            assert_eq!(err.target, ValueType::Integer);
        }
    }

    #[test]
    fn test_parse_bool_vocabulary_is_case_insensitive() {
        for raw in ["true", "TRUE", "1", "Yes", "y", "On", " yes "] {
            assert_eq!(parse_bool("k", raw), Ok(true), "{raw:?} should be true");
        }
        for raw in ["false", "False", "0", "NO", "n", "off"] {
            assert_eq!(parse_bool("k", raw), Ok(false), "{raw:?} should be false");
        }
    }

    #[test]
    fn test_parse_bool_rejects_unknown_literals() {
        let err = parse_bool("FEATURE_X", "maybe").unwrap_err();
        assert_eq!(err.value, "maybe");
        assert_eq!(err.target, ValueType::Boolean);
        assert!(parse_bool("k", "").is_err());
        assert!(parse_bool("k", "2").is_err());
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("k", "1.5"), Ok(1.5));
        assert_eq!(parse_float("k", "3"), Ok(3.0));
        assert!(parse_float("k", "one").is_err());
    }
}
