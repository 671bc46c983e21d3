//! Row id coercion
//!
//! Ids are `SERIAL` columns. Path segments and body foreign keys arrive as
//! text or JSON numbers and are coerced here; anything that is not a 32-bit
//! integer is reported as [`DbError::InvalidId`], which the HTTP layer treats
//! like any other failed statement.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::text::into_text;
use crate::db::DbError;

/// Parse a row id from its textual form.
///
/// Surrounding whitespace is ignored, matching PostgreSQL's integer input.
///
/// # Example
/// ```
/// use agentdb_server::models::parse_id;
///
/// assert_eq!(parse_id("42").unwrap(), 42);
/// assert_eq!(parse_id(" 7 ").unwrap(), 7);
/// assert!(parse_id("abc").is_err());
/// ```
pub fn parse_id(raw: &str) -> Result<i32, DbError> {
    raw.trim().parse::<i32>().map_err(|_| DbError::InvalidId {
        raw: raw.to_owned(),
    })
}

/// A foreign key as supplied in a request body.
///
/// Any JSON value is accepted; only [`RawId::parse`] decides whether it is a
/// usable id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawId(String);

impl RawId {
    /// Coerce to a row id.
    pub fn parse(&self) -> Result<i32, DbError> {
        parse_id(&self.0)
    }
}

impl From<i32> for RawId {
    fn from(id: i32) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for RawId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self(into_text(value).unwrap_or_default()))
    }
}

/// Coerce an optional body foreign key.
pub(crate) fn parse_optional(raw: Option<&RawId>) -> Result<Option<i32>, DbError> {
    raw.map(RawId::parse).transpose()
}
