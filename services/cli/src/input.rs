//! Raw field sources for the command line driver.

use anyhow::{anyhow, Context, Result};
use funnel_engine::RawFields;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Parse a JSON object of raw fields. Keys may be form ids (`sellPrice`) or
/// field names (`sell_price`); values may be strings or numbers.
pub fn raw_fields_from_json(text: &str) -> Result<RawFields> {
    let object: HashMap<String, Value> =
        serde_json::from_str(text).context("input must be a JSON object")?;

    let mut fields = HashMap::with_capacity(object.len());
    for (key, value) in object {
        let text = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Null => String::new(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            other => return Err(anyhow!("field `{}` has unsupported value {}", key, other)),
        };
        fields.insert(key, text);
    }
    Ok(RawFields::from_map(&fields))
}

pub fn read_raw_fields(path: &Path) -> Result<RawFields> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    raw_fields_from_json(&text).with_context(|| format!("invalid input file {}", path.display()))
}

/// Apply `(key, value)` overrides; `None` leaves the field untouched.
pub fn apply_overrides<'a, I>(raw: &mut RawFields, overrides: I)
where
    I: IntoIterator<Item = (&'a str, Option<&'a String>)>,
{
    for (key, value) in overrides {
        if let Some(value) = value {
            raw.set(key, value.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_numbers_and_strings() {
        let raw = raw_fields_from_json(
            r#"{"cost": 50, "sellPrice": "120", "confirmRate": 0.8, "cppList": "5,10"}"#,
        )
        .unwrap();
        assert_eq!(raw.cost, "50");
        assert_eq!(raw.sell_price, "120");
        assert_eq!(raw.confirm_rate, "0.8");
        assert_eq!(raw.cpp_list, "5,10");
    }

    #[test]
    fn test_json_cpp_array_joined() {
        let raw = raw_fields_from_json(r#"{"cpp_list": [5, "7.5", 10]}"#).unwrap();
        assert_eq!(raw.cpp_list, "5,7.5,10");
    }

    #[test]
    fn test_json_rejects_non_object() {
        assert!(raw_fields_from_json("[1,2]").is_err());
        assert!(raw_fields_from_json("not json").is_err());
    }

    #[test]
    fn test_json_rejects_nested_object() {
        assert!(raw_fields_from_json(r#"{"cost": {"value": 1}}"#).is_err());
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let mut raw = raw_fields_from_json(r#"{"cost": 50, "targetQty": 100}"#).unwrap();
        let cost = "65".to_string();
        apply_overrides(&mut raw, [("cost", Some(&cost)), ("targetQty", None)]);
        assert_eq!(raw.cost, "65");
        assert_eq!(raw.target_qty, "100");
    }
}
