//! Conversation repository

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{Conversation, NewConversation};

/// Conversation repository
pub struct ConversationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ConversationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all conversations, newest first.
    pub async fn list(&self) -> Result<Vec<Conversation>, DbError> {
        let conversations = sqlx::query_as::<_, Conversation>(
            r#"
            SELECT id::int4 AS id, agent_id::int4 AS agent_id, title, context,
                   created_at::timestamptz AS created_at, updated_at::timestamptz AS updated_at
            FROM conversations
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(conversations)
    }

    /// List one agent's conversations, newest first.
    ///
    /// An unknown agent yields an empty list, not an error.
    pub async fn list_for_agent(&self, agent_id: i32) -> Result<Vec<Conversation>, DbError> {
        let conversations = sqlx::query_as::<_, Conversation>(
            r#"
            SELECT id::int4 AS id, agent_id::int4 AS agent_id, title, context,
                   created_at::timestamptz AS created_at, updated_at::timestamptz AS updated_at
            FROM conversations
            WHERE agent_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(agent_id)
        .fetch_all(self.pool)
        .await?;

        Ok(conversations)
    }

    pub async fn create(&self, conversation: NewConversation) -> Result<Conversation, DbError> {
        let conversation = sqlx::query_as::<_, Conversation>(
            r#"
            INSERT INTO conversations (agent_id, title, context, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING id::int4 AS id, agent_id::int4 AS agent_id, title, context,
                      created_at::timestamptz AS created_at, updated_at::timestamptz AS updated_at
            "#,
        )
        .bind(conversation.agent_id)
        .bind(conversation.title)
        .bind(conversation.context)
        .fetch_one(self.pool)
        .await?;

        Ok(conversation)
    }
}
