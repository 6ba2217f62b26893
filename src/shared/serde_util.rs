//! Custom serde helpers for EDAN wire formats.
//!
//! The service is loose about scalar types: the same field may arrive as
//! `1`, `"1"` or `true` depending on the endpoint. These helpers accept all
//! of them and fall back to `None` for anything unrecognized.

use serde_json::Value;

/// Deserializes an integer-like field into `Option<i64>`.
///
/// Use with `#[serde(default, deserialize_with = "serde_util::lenient_i64::deserialize")]`.
pub mod lenient_i64 {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(super::value_to_i64))
    }
}

/// Deserializes a string-or-number field into `String`.
pub mod lenient_string {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        super::value_to_string(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("expected string, got {}", value)))
    }

    /// Optional variant; `null` and non-scalar values become `None`.
    pub fn option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(super::value_to_string))
    }
}

/// Deserializes a nested object into `Option<T>`.
///
/// Anything that is not a JSON object, or that does not fit `T`, becomes
/// `None` instead of failing the whole payload.
pub mod lenient_object {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value
            .filter(Value::is_object)
            .and_then(|v| serde_json::from_value(v).ok()))
    }
}

pub(crate) fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

pub(crate) fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Render a remote `error` value as a message: strings verbatim, anything
/// else as compact JSON.
pub(crate) fn error_message(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
