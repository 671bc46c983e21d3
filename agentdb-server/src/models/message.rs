//! Conversation messages
//!
//! Messages are immutable once stored, so there is no update payload and no
//! `updated_at` column.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::id::parse_optional;
use super::{or_empty_object, RawId};
use crate::db::DbError;

/// Message record from the `messages` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Message {
    pub id: i32,
    pub conversation_id: Option<i32>,
    pub sender_type: Option<String>,
    pub content: Option<String>,
    pub metadata: Option<Value>,
    pub created_at: DateTime<Utc>,
}

/// POST /api/messages body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMessageRequest {
    pub conversation_id: Option<RawId>,
    #[serde(default, deserialize_with = "super::text::lenient")]
    pub sender_type: Option<String>,
    #[serde(default, deserialize_with = "super::text::lenient")]
    pub content: Option<String>,
    pub metadata: Option<Value>,
}

/// Message insert with creation defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub conversation_id: Option<i32>,
    pub sender_type: Option<String>,
    pub content: Option<String>,
    pub metadata: Value,
}

impl TryFrom<CreateMessageRequest> for NewMessage {
    type Error = DbError;

    fn try_from(req: CreateMessageRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            conversation_id: parse_optional(req.conversation_id.as_ref())?,
            sender_type: req.sender_type,
            content: req.content,
            metadata: or_empty_object(req.metadata),
        })
    }
}
