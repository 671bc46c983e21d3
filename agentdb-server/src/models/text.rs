//! Scalar coercion for request bodies
//!
//! Body fields are never rejected for their JSON type. Text columns store the
//! string form of whatever scalar arrived, boolean columns follow PostgreSQL's
//! boolean input rules, and creation defaults apply to any falsy value
//! (`null`, `false`, `0`, `""`).

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::db::DbError;

/// String form of a body value, `None` for `null`.
///
/// Whole floats print without a fraction (`1.0` becomes `"1"`); objects and
/// arrays are stored as their JSON text.
pub fn into_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        }),
        other => Some(other.to_string()),
    }
}

/// `deserialize_with` target for optional text columns.
pub fn lenient<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(into_text))
}

pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Parse PostgreSQL boolean input: `true`/`false`, `yes`/`no`, `on`/`off`,
/// `1`/`0`, case-insensitive, any unambiguous prefix, surrounding whitespace
/// ignored.
pub fn parse_bool(raw: &str) -> Option<bool> {
    let input = raw.trim().to_ascii_lowercase();
    match input.as_str() {
        "" | "o" => None,
        "1" | "on" => Some(true),
        "0" | "of" | "off" => Some(false),
        s if "true".starts_with(s) || "yes".starts_with(s) => Some(true),
        s if "false".starts_with(s) || "no".starts_with(s) => Some(false),
        _ => None,
    }
}

/// Coerce a body value bound to a boolean column; `null` stays NULL.
pub fn into_bool(value: Value) -> Result<Option<bool>, DbError> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(b)),
        other => {
            let Some(raw) = into_text(other) else {
                return Ok(None);
            };
            parse_bool(&raw)
                .map(Some)
                .ok_or(DbError::InvalidBool { raw })
        }
    }
}
