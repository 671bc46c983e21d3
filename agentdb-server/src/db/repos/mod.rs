//! PostgreSQL repositories
//!
//! One repository per table, each borrowing the pool for the duration of a
//! call. [`PgStore`] owns the pool and implements [`Store`] by delegating to
//! them.
//!
//! Ids and timestamps are cast in the select lists (`::int4`, `::timestamptz`)
//! so tables keyed by `BIGSERIAL` or stamped with `TIMESTAMP` decode as well.

pub mod agent_tools;
pub mod agents;
pub mod conversations;
pub mod messages;
pub mod stats;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

pub use agent_tools::AgentToolRepo;
pub use agents::AgentRepo;
pub use conversations::ConversationRepo;
pub use messages::MessageRepo;
pub use stats::StatsRepo;

use super::{Store, StoreResult};
use crate::models::{
    Agent, AgentTool, AgentToolUpdate, AgentUpdate, Conversation, Message, NewAgent,
    NewAgentTool, NewConversation, NewMessage, Stats,
};

/// [`Store`] backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> StoreResult<DateTime<Utc>> {
        let now = sqlx::query_scalar::<_, DateTime<Utc>>("SELECT NOW()")
            .fetch_one(&self.pool)
            .await?;
        Ok(now)
    }

    async fn list_agents(&self) -> StoreResult<Vec<Agent>> {
        AgentRepo::new(&self.pool).list().await
    }

    async fn get_agent(&self, id: i32) -> StoreResult<Agent> {
        AgentRepo::new(&self.pool).get(id).await
    }

    async fn create_agent(&self, agent: NewAgent) -> StoreResult<Agent> {
        AgentRepo::new(&self.pool).create(agent).await
    }

    async fn update_agent(&self, id: i32, update: AgentUpdate) -> StoreResult<Agent> {
        AgentRepo::new(&self.pool).update(id, update).await
    }

    async fn delete_agent(&self, id: i32) -> StoreResult<i32> {
        AgentRepo::new(&self.pool).delete(id).await
    }

    async fn list_conversations(&self) -> StoreResult<Vec<Conversation>> {
        ConversationRepo::new(&self.pool).list().await
    }

    async fn list_agent_conversations(&self, agent_id: i32) -> StoreResult<Vec<Conversation>> {
        ConversationRepo::new(&self.pool).list_for_agent(agent_id).await
    }

    async fn create_conversation(
        &self,
        conversation: NewConversation,
    ) -> StoreResult<Conversation> {
        ConversationRepo::new(&self.pool).create(conversation).await
    }

    async fn list_messages(&self, conversation_id: i32) -> StoreResult<Vec<Message>> {
        MessageRepo::new(&self.pool)
            .list_for_conversation(conversation_id)
            .await
    }

    async fn create_message(&self, message: NewMessage) -> StoreResult<Message> {
        MessageRepo::new(&self.pool).create(message).await
    }

    async fn list_agent_tools(&self) -> StoreResult<Vec<AgentTool>> {
        AgentToolRepo::new(&self.pool).list().await
    }

    async fn list_tools_for_agent(&self, agent_id: i32) -> StoreResult<Vec<AgentTool>> {
        AgentToolRepo::new(&self.pool).list_for_agent(agent_id).await
    }

    async fn create_agent_tool(&self, tool: NewAgentTool) -> StoreResult<AgentTool> {
        AgentToolRepo::new(&self.pool).create(tool).await
    }

    async fn update_agent_tool(
        &self,
        id: i32,
        update: AgentToolUpdate,
    ) -> StoreResult<AgentTool> {
        AgentToolRepo::new(&self.pool).update(id, update).await
    }

    async fn delete_agent_tool(&self, id: i32) -> StoreResult<i32> {
        AgentToolRepo::new(&self.pool).delete(id).await
    }

    async fn stats(&self) -> StoreResult<Stats> {
        StatsRepo::new(&self.pool).counts().await
    }
}
