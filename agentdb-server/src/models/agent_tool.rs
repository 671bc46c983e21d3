//! Tools attached to agents

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::id::parse_optional;
use super::text::into_bool;
use super::{or_empty_object, RawId};
use crate::db::DbError;

/// Agent tool record from the `agent_tools` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AgentTool {
    pub id: i32,
    pub agent_id: Option<i32>,
    pub tool_name: Option<String>,
    pub tool_config: Option<Value>,
    pub enabled: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// POST /api/agent-tools body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAgentToolRequest {
    pub agent_id: Option<RawId>,
    #[serde(default, deserialize_with = "super::text::lenient")]
    pub tool_name: Option<String>,
    pub tool_config: Option<Value>,
    pub enabled: Option<Value>,
}

/// Agent tool insert with creation defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct NewAgentTool {
    pub agent_id: Option<i32>,
    pub tool_name: Option<String>,
    pub tool_config: Value,
    pub enabled: bool,
}

impl TryFrom<CreateAgentToolRequest> for NewAgentTool {
    type Error = DbError;

    fn try_from(req: CreateAgentToolRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            agent_id: parse_optional(req.agent_id.as_ref())?,
            tool_name: req.tool_name,
            tool_config: or_empty_object(req.tool_config),
            // Only an explicit `false` disables a new tool
            enabled: req.enabled != Some(Value::Bool(false)),
        })
    }
}

/// PUT /api/agent-tools/{id} body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAgentToolRequest {
    pub tool_config: Option<Value>,
    pub enabled: Option<Value>,
}

/// Full replace of an agent tool's mutable columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentToolUpdate {
    pub tool_config: Option<Value>,
    pub enabled: Option<bool>,
}

impl TryFrom<UpdateAgentToolRequest> for AgentToolUpdate {
    type Error = DbError;

    fn try_from(req: UpdateAgentToolRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            tool_config: req.tool_config,
            enabled: req.enabled.map(into_bool).transpose()?.flatten(),
        })
    }
}
