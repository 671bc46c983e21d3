//! Row types and request payloads
//!
//! Row types decode straight from `sqlx` rows and serialize as the API's
//! response bodies. Request types keep every field optional: the only input
//! handling performed is type coercion, and missing fields either take their
//! creation default or are written through as NULL on a full-replace update.

pub mod agent;
pub mod agent_tool;
pub mod conversation;
pub mod id;
pub mod message;
pub mod stats;
pub mod text;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use agent::{Agent, AgentUpdate, CreateAgentRequest, NewAgent, DEFAULT_AGENT_STATUS};
pub use agent_tool::{
    AgentTool, AgentToolUpdate, CreateAgentToolRequest, NewAgentTool, UpdateAgentToolRequest,
};
pub use conversation::{Conversation, CreateConversationRequest, NewConversation};
pub use id::{parse_id, RawId};
pub use message::{CreateMessageRequest, Message, NewMessage};
pub use stats::Stats;

/// Body returned by the DELETE endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deleted {
    pub message: String,
    pub id: i32,
}

impl Deleted {
    pub fn new(message: impl Into<String>, id: i32) -> Self {
        Self {
            message: message.into(),
            id,
        }
    }
}

/// Resolve an optional JSON document, falling back to `{}` for any falsy value.
pub fn or_empty_object(value: Option<Value>) -> Value {
    match value {
        Some(value) if !text::is_falsy(&value) => value,
        _ => Value::Object(Map::new()),
    }
}

/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
