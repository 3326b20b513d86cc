//! JSON serialization helpers for deterministic output.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io;

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Serializes a value to deterministic JSON.
///
/// Output format:
/// - 2-space indentation
/// - Trailing newline
/// - Object keys in declaration/insertion order
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buffer)?;
    json.push('\n'); // Trailing newline
    Ok(json)
}

/// Deserializes JSON from a string.
///
/// Handles both pretty-printed and minified JSON.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, SerializationError> {
    serde_json::from_str(json).map_err(SerializationError::Deserialize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_stable_serialization_has_trailing_newline() {
        let value = json!({ "key": "value" });
        let rendered = to_json_stable(&value).expect("serialization should work");
        assert!(rendered.ends_with('\n'));
        assert!(!rendered.ends_with("\n\n"));
    }

    #[test]
    fn test_stable_serialization_uses_two_space_indent() {
        let value = json!({ "key": "value" });
        let rendered = to_json_stable(&value).expect("serialization should work");
        assert!(rendered.contains("  \"key\""));
    }

    #[test]
    fn test_object_keys_keep_insertion_order() {
        let value = json!({ "zebra": 1, "apple": 2, "mango": 3 });
        let rendered = to_json_stable(&value).expect("serialization should work");
        let zebra_pos = rendered.find("zebra").expect("zebra should be in json");
        let apple_pos = rendered.find("apple").expect("apple should be in json");
        let mango_pos = rendered.find("mango").expect("mango should be in json");

        assert!(zebra_pos < apple_pos);
        assert!(apple_pos < mango_pos);
    }

    #[test]
    fn test_roundtrip_serialization() {
        let original = json!({ "name": "test", "items": [1, 2, 3] });
        let rendered = to_json_stable(&original).expect("serialization should work");
        let restored: serde_json::Value = from_json(&rendered).expect("deserialization should work");
        assert_eq!(original, restored);
    }

    #[test]
    fn test_from_json_rejects_invalid_input() {
        let result: Result<serde_json::Value, _> = from_json(r#"{"invalid": }"#);
        assert!(result.is_err());
    }
}
