//! API response envelopes
//!
//! The backend is inconsistent about wrapping: lists come back either bare
//! (`[...]`) or under a key (`{"orders": [...]}`), single entities either
//! bare or as `{"order": {...}}`. Errors carry `{"message": "..."}`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Generic `{message}` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Unwrap a list response, accepting `{key: [...]}`, `[...]` or `null`
pub fn unwrap_list<T: DeserializeOwned>(value: Value, key: &str) -> serde_json::Result<Vec<T>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Object(mut map) if map.contains_key(key) => match map.remove(key) {
            Some(Value::Null) | None => Ok(Vec::new()),
            Some(inner) => serde_json::from_value(inner),
        },
        other => serde_json::from_value(other),
    }
}

/// Unwrap a single-entity response, accepting `{key: {...}}` or the bare entity
pub fn unwrap_entity<T: DeserializeOwned>(value: Value, key: &str) -> serde_json::Result<T> {
    match value {
        Value::Object(mut map) if matches!(map.get(key), Some(Value::Object(_))) => {
            serde_json::from_value(map.remove(key).unwrap_or_default())
        }
        other => serde_json::from_value(other),
    }
}

/// Extract the server's `message` from an error body, if it has one
pub fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<MessageResponse>(body)
        .ok()
        .and_then(|r| r.message)
        .filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_list_shapes() {
        let wrapped: Vec<u32> = unwrap_list(json!({ "orders": [1, 2] }), "orders").unwrap();
        assert_eq!(wrapped, vec![1, 2]);

        let bare: Vec<u32> = unwrap_list(json!([3]), "orders").unwrap();
        assert_eq!(bare, vec![3]);

        let empty: Vec<u32> = unwrap_list(Value::Null, "orders").unwrap();
        assert!(empty.is_empty());

        let null_inner: Vec<u32> = unwrap_list(json!({ "orders": null }), "orders").unwrap();
        assert!(null_inner.is_empty());

        assert!(unwrap_list::<u32>(json!({ "other": [1] }), "orders").is_err());
    }

    #[test]
    fn test_unwrap_entity_shapes() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Thing {
            id: String,
        }

        let wrapped: Thing = unwrap_entity(json!({ "order": { "id": "a" } }), "order").unwrap();
        assert_eq!(wrapped, Thing { id: "a".into() });

        let bare: Thing = unwrap_entity(json!({ "id": "b", "order": "x" }), "order").unwrap();
        assert_eq!(bare, Thing { id: "b".into() });
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(r#"{"message":"Invalid credentials"}"#).as_deref(),
            Some("Invalid credentials")
        );
        assert_eq!(error_message("Bad Gateway"), None);
        assert_eq!(error_message(r#"{"message":""}"#), None);
    }
}
