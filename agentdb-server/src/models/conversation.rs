//! Conversations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::id::parse_optional;
use super::{or_empty_object, RawId};
use crate::db::DbError;

/// Conversation record from the `conversations` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Conversation {
    pub id: i32,
    pub agent_id: Option<i32>,
    pub title: Option<String>,
    pub context: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// POST /api/conversations body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateConversationRequest {
    pub agent_id: Option<RawId>,
    #[serde(default, deserialize_with = "super::text::lenient")]
    pub title: Option<String>,
    pub context: Option<Value>,
}

/// Conversation insert with creation defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct NewConversation {
    pub agent_id: Option<i32>,
    pub title: Option<String>,
    pub context: Value,
}

impl TryFrom<CreateConversationRequest> for NewConversation {
    type Error = DbError;

    fn try_from(req: CreateConversationRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            agent_id: parse_optional(req.agent_id.as_ref())?,
            title: req.title,
            context: or_empty_object(req.context),
        })
    }
}
