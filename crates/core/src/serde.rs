//! Serde helper functions for loosely typed JSON request bodies.
//!
//! Clients post hand-built JSON, so a field may be missing, `null`, or of the
//! wrong type. These helpers normalise those cases before validation runs.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an optional string, treating any non-string value as None.
///
/// Numbers, booleans, arrays and objects are discarded rather than rejected so
/// that validation can report the field as missing.
pub fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Deserialize a field that distinguishes "absent" from "explicitly null".
///
/// Use together with `#[serde(default)]`: a missing key stays `None`, a `null`
/// becomes `Some(None)` and a value becomes `Some(Some(value))`.
pub fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Trim a string and drop it when nothing is left.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_text")]
        text_field: Option<String>,
        #[serde(default, deserialize_with = "deserialize_present")]
        present_field: Option<Option<String>>,
    }

    #[test]
    fn test_optional_text_keeps_strings() {
        let json = r#"{"text_field": "  hello "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.text_field, Some("  hello ".to_string()));
    }

    #[test]
    fn test_optional_text_drops_non_strings() {
        for json in [
            r#"{"text_field": 42}"#,
            r#"{"text_field": true}"#,
            r#"{"text_field": ["a"]}"#,
            r#"{"text_field": {"a": 1}}"#,
            r#"{"text_field": null}"#,
        ] {
            let result: TestStruct = serde_json::from_str(json).unwrap();
            assert_eq!(result.text_field, None, "input: {json}");
        }
    }

    #[test]
    fn test_optional_text_missing() {
        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(result.text_field, None);
    }

    #[test]
    fn test_present_distinguishes_null_from_missing() {
        let missing: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.present_field, None);

        let null: TestStruct = serde_json::from_str(r#"{"present_field": null}"#).unwrap();
        assert_eq!(null.present_field, Some(None));

        let value: TestStruct =
            serde_json::from_str(r#"{"present_field": "2025-01-01"}"#).unwrap();
        assert_eq!(value.present_field, Some(Some("2025-01-01".to_string())));
    }

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional(None), None);
        assert_eq!(normalize_optional(Some("   ".to_string())), None);
        assert_eq!(
            normalize_optional(Some(" 555-0100 ".to_string())),
            Some("555-0100".to_string())
        );
    }
}
