//! Tolerant field readers for exported rule content.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads a text field, rendering `null` as the empty string and scalars as
/// their JSON text.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Reads an optional identifier given either as a string or as a number.
///
/// `null` and non-scalar values read as `None`.
pub fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}
