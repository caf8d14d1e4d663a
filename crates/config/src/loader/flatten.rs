//! Flattening of structured documents into string key/value pairs.
//!
//! YAML and TOML values are first converted into `serde_json::Value`, then a
//! single walker flattens nested mappings into dotted keys.
//!
//! Rules:
//! - Nested mappings join their keys with `KEY_SEPARATOR`.
//! - Strings are kept verbatim; booleans and numbers use their literal form.
//! - Arrays are stored as compact JSON text.
//! - `null` entries are dropped.
//! - Two paths that flatten to the same key (`{"a.b": 1, "a": {"b": 2}}`) are rejected.

use serde_json::{Map, Number, Value};
use std::collections::BTreeSet;

use crate::constants::KEY_SEPARATOR;

pub(crate) type Entries = Vec<(String, String)>;

/// Flatten a top-level mapping. Any other root, `null` included, is rejected.
pub(crate) fn flatten_root(root: Value) -> Result<Entries, String> {
    match root {
        Value::Object(map) => {
            let mut out = Vec::new();
            flatten_into(None, map, &mut out);
            reject_duplicate_keys(&out)?;
            Ok(out)
        }
        other => Err(format!(
            "expected a mapping at the top level, found {}",
            json_type_name(&other)
        )),
    }
}

fn flatten_into(prefix: Option<&str>, map: Map<String, Value>, out: &mut Entries) {
    for (key, value) in map {
        let full_key = match prefix {
            Some(prefix) => format!("{prefix}{KEY_SEPARATOR}{key}"),
            None => key,
        };
        match value {
            Value::Null => {}
            Value::Object(nested) => flatten_into(Some(&full_key), nested, out),
            Value::String(s) => out.push((full_key, s)),
            Value::Bool(b) => out.push((full_key, b.to_string())),
            Value::Number(n) => out.push((full_key, n.to_string())),
            array @ Value::Array(_) => out.push((full_key, array.to_string())),
        }
    }
}

fn reject_duplicate_keys(entries: &Entries) -> Result<(), String> {
    let mut seen = BTreeSet::new();
    for (key, _) in entries {
        if !seen.insert(key.as_str()) {
            return Err(format!("key {key:?} is defined more than once after flattening"));
        }
    }
    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

fn float_value(f: f64) -> Value {
    // JSON has no representation for NaN or infinities.
    Number::from_f64(f)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(f.to_string()))
}

pub(crate) fn yaml_to_json(value: serde_yaml::Value) -> Result<Value, String> {
    use serde_yaml::Value as Yaml;

    Ok(match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                float_value(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<_, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, value) in mapping {
                map.insert(yaml_key(key)?, yaml_to_json(value)?);
            }
            Value::Object(map)
        }
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

fn yaml_key(key: serde_yaml::Value) -> Result<String, String> {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Null => Ok("null".to_string()),
        Yaml::Tagged(tagged) => yaml_key(tagged.value),
        Yaml::Sequence(_) | Yaml::Mapping(_) => {
            Err("mapping keys must be scalars to be flattened".to_string())
        }
    }
}

pub(crate) fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => float_value(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn as_map(entries: Entries) -> BTreeMap<String, String> {
        entries.into_iter().collect()
    }

    #[test]
    fn test_flatten_nested_objects_with_dotted_keys() {
        let entries = flatten_root(json!({
            "APP_NAME": "demo",
            "db": {"host": "localhost", "port": 5432, "pool": {"max": 10}},
        }))
        .unwrap();

        let map = as_map(entries);
        assert_eq!(map["APP_NAME"], "demo");
        assert_eq!(map["db.host"], "localhost");
        assert_eq!(map["db.port"], "5432");
        assert_eq!(map["db.pool.max"], "10");
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn test_flatten_scalars_arrays_and_nulls() {
        let map = as_map(
            flatten_root(json!({
                "flag": true,
                "ratio": 0.5,
                "hosts": ["a", "b"],
                "unset": null,
            }))
            .unwrap(),
        );

        assert_eq!(map["flag"], "true");
        assert_eq!(map["ratio"], "0.5");
        assert_eq!(map["hosts"], r#"["a","b"]"#);
        assert!(!map.contains_key("unset"));
    }

    #[test]
    fn test_flatten_rejects_non_mapping_roots() {
        let err = flatten_root(json!([1, 2, 3])).unwrap_err();
        assert!(err.contains("sequence"), "got: {err}");
        assert!(flatten_root(json!("text")).is_err());
        let err = flatten_root(Value::Null).unwrap_err();
        assert!(err.contains("found null"), "got: {err}");
    }

    #[test]
    fn test_flatten_rejects_colliding_dotted_keys() {
        let err = flatten_root(json!({"a.b": 1, "a": {"b": 2}})).unwrap_err();
        assert!(err.contains("\"a.b\""), "got: {err}");
        assert!(err.contains("more than once"), "got: {err}");

        // Sibling keys that only share a prefix do not collide.
        assert!(flatten_root(json!({"a.b": 1, "a": {"c": 2}})).is_ok());
    }

    #[test]
    fn test_yaml_scalar_keys_are_stringified() {
        let yaml: serde_yaml::Value =
            serde_yaml::from_str("ports:\n  80: http\n  443: https\ntrue: yes\n").unwrap();
        let map = as_map(flatten_root(yaml_to_json(yaml).unwrap()).unwrap());
        assert_eq!(map["ports.80"], "http");
        assert_eq!(map["ports.443"], "https");
        assert_eq!(map["true"], "yes");
    }

    #[test]
    fn test_yaml_composite_keys_are_rejected() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("? [a, b]\n: value\n").unwrap();
        assert!(yaml_to_json(yaml).is_err());
    }

    #[test]
    fn test_toml_datetimes_keep_their_literal_form() {
        let table: toml::Table = toml::from_str("released = 1979-05-27T07:32:00Z\n").unwrap();
        let map = as_map(flatten_root(toml_to_json(toml::Value::Table(table))).unwrap());
        assert_eq!(map["released"], "1979-05-27T07:32:00Z");
    }

    #[test]
    fn test_non_finite_floats_are_kept_as_text() {
        assert_eq!(float_value(f64::INFINITY), Value::String("inf".to_string()));
        assert_eq!(float_value(1.25), json!(1.25));
    }
}
