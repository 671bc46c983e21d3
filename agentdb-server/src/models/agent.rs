//! Agents

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::or_empty_object;
use super::text::{into_text, is_falsy};

/// Status given to agents created without one
pub const DEFAULT_AGENT_STATUS: &str = "inactive";

/// Agent record from the `agents` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Agent {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub capabilities: Option<Value>,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// POST /api/agents body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAgentRequest {
    #[serde(default, deserialize_with = "super::text::lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::text::lenient")]
    pub description: Option<String>,
    pub capabilities: Option<Value>,
    /// Kept raw so a falsy status takes the default before coercion.
    pub status: Option<Value>,
}

/// Agent insert with creation defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct NewAgent {
    pub name: Option<String>,
    pub description: Option<String>,
    pub capabilities: Value,
    pub status: String,
}

impl From<CreateAgentRequest> for NewAgent {
    fn from(req: CreateAgentRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            capabilities: or_empty_object(req.capabilities),
            status: req
                .status
                .filter(|status| !is_falsy(status))
                .and_then(into_text)
                .unwrap_or_else(|| DEFAULT_AGENT_STATUS.to_owned()),
        }
    }
}

/// PUT /api/agents/{id} body.
///
/// Full replace: a missing field overwrites its column with NULL.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AgentUpdate {
    #[serde(default, deserialize_with = "super::text::lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::text::lenient")]
    pub description: Option<String>,
    pub capabilities: Option<Value>,
    #[serde(default, deserialize_with = "super::text::lenient")]
    pub status: Option<String>,
}
