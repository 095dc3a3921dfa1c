//! Value serialization and brace escaping
//!
//! Example values are serialized to their canonical compact JSON text. In
//! JSON output mode every brace in the serialized text is doubled so that
//! braces belonging to serialized objects are not mistaken for placeholder
//! syntax during substitution. [`escape_braces`] and [`unescape_braces`] are
//! a symmetric pair: binding undoes exactly what serialization applied.

use serde_json::Value;

use crate::template::OutputFormat;

/// Serialize a value to canonical JSON text, escaping braces in JSON mode
///
/// Strings serialize with their surrounding quotes (`"today"`), matching the
/// JSON text form of every other value kind.
pub fn serialize_value(value: &Value, format: OutputFormat) -> String {
    let text = value.to_string();
    match format {
        OutputFormat::Json => escape_braces(&text),
        OutputFormat::Text => text,
    }
}

/// Double every brace: `{` becomes `{{` and `}` becomes `}}`
pub fn escape_braces(text: &str) -> String {
    text.replace('{', "{{").replace('}', "}}")
}

/// Undo [`escape_braces`]: `{{` becomes `{` and `}}` becomes `}`
pub fn unescape_braces(text: &str) -> String {
    text.replace("{{", "{").replace("}}", "}")
}

/// Check that a textual value parses as JSON
///
/// Non-textual values are already structured data and are accepted without
/// a parse attempt.
pub fn check_json(value: &Value) -> Result<(), serde_json::Error> {
    if let Value::String(text) = value {
        serde_json::from_str::<Value>(text)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_string_keeps_quotes() {
        let value = Value::String("today at 9".to_string());
        assert_eq!(
            serialize_value(&value, OutputFormat::Text),
            r#""today at 9""#
        );
    }

    #[test]
    fn test_serialize_object_doubles_braces_in_json_mode() {
        let value = json!({"city": "Paris"});
        assert_eq!(
            serialize_value(&value, OutputFormat::Json),
            r#"{{"city":"Paris"}}"#
        );
    }

    #[test]
    fn test_serialize_object_untouched_in_text_mode() {
        let value = json!({"city": "Paris"});
        assert_eq!(
            serialize_value(&value, OutputFormat::Text),
            r#"{"city":"Paris"}"#
        );
    }

    #[test]
    fn test_serialize_nested_value() {
        let value = json!({"a": {"b": [1, 2]}});
        assert_eq!(
            serialize_value(&value, OutputFormat::Json),
            r#"{{"a":{{"b":[1,2]}}}}"#
        );
    }

    #[test]
    fn test_escape_unescape_symmetry() {
        let cases = ["", "plain", "{\"a\":1}", "{{already}}", "a{b}c{d}e"];
        for case in cases {
            assert_eq!(unescape_braces(&escape_braces(case)), case);
        }
    }

    #[test]
    fn test_check_json_accepts_valid_text() {
        assert!(check_json(&Value::String("{\"a\": 1}".to_string())).is_ok());
        assert!(check_json(&Value::String("[1, 2, 3]".to_string())).is_ok());
        assert!(check_json(&Value::String("42".to_string())).is_ok());
    }

    #[test]
    fn test_check_json_rejects_invalid_text() {
        assert!(check_json(&Value::String("not json".to_string())).is_err());
    }

    #[test]
    fn test_check_json_accepts_structured_values() {
        assert!(check_json(&json!({"a": 1})).is_ok());
        assert!(check_json(&json!([1, 2])).is_ok());
        assert!(check_json(&Value::Null).is_ok());
    }
}
