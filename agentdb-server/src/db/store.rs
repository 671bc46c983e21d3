//! Storage port used by the HTTP layer
//!
//! Handlers only see [`Store`]; [`PgStore`](super::PgStore) is the
//! production implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::DbError;
use crate::models::{
    Agent, AgentTool, AgentToolUpdate, AgentUpdate, Conversation, Message, NewAgent,
    NewAgentTool, NewConversation, NewMessage, Stats,
};

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, DbError>;

/// One method per API operation.
///
/// Targeted reads, updates and deletes return [`DbError::NotFound`] when no
/// row matches. Lists come back in API order: newest first, except messages,
/// which are oldest first.
#[async_trait]
pub trait Store: Send + Sync {
    /// Liveness probe; returns the database server's clock.
    async fn ping(&self) -> StoreResult<DateTime<Utc>>;

    async fn list_agents(&self) -> StoreResult<Vec<Agent>>;

    async fn get_agent(&self, id: i32) -> StoreResult<Agent>;

    async fn create_agent(&self, agent: NewAgent) -> StoreResult<Agent>;

    /// Replace every mutable column of an agent.
    async fn update_agent(&self, id: i32, update: AgentUpdate) -> StoreResult<Agent>;

    /// Delete an agent, returning the deleted id.
    async fn delete_agent(&self, id: i32) -> StoreResult<i32>;

    async fn list_conversations(&self) -> StoreResult<Vec<Conversation>>;

    async fn list_agent_conversations(&self, agent_id: i32) -> StoreResult<Vec<Conversation>>;

    async fn create_conversation(&self, conversation: NewConversation)
        -> StoreResult<Conversation>;

    async fn list_messages(&self, conversation_id: i32) -> StoreResult<Vec<Message>>;

    async fn create_message(&self, message: NewMessage) -> StoreResult<Message>;

    async fn list_agent_tools(&self) -> StoreResult<Vec<AgentTool>>;

    async fn list_tools_for_agent(&self, agent_id: i32) -> StoreResult<Vec<AgentTool>>;

    async fn create_agent_tool(&self, tool: NewAgentTool) -> StoreResult<AgentTool>;

    /// Replace `tool_config` and `enabled` of an agent tool.
    async fn update_agent_tool(&self, id: i32, update: AgentToolUpdate)
        -> StoreResult<AgentTool>;

    /// Delete an agent tool, returning the deleted id.
    async fn delete_agent_tool(&self, id: i32) -> StoreResult<i32>;

    async fn stats(&self) -> StoreResult<Stats>;
}
