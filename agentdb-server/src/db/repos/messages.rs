//! Message repository
//!
//! Insert and list only: messages are never updated or deleted through the API.

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{Message, NewMessage};

/// Message repository
pub struct MessageRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> MessageRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Add a message. A missing conversation is the foreign key's problem.
    pub async fn create(&self, message: NewMessage) -> Result<Message, DbError> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (conversation_id, sender_type, content, metadata, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING id::int4 AS id, conversation_id::int4 AS conversation_id, sender_type, content, metadata,
                      created_at::timestamptz AS created_at
            "#,
        )
        .bind(message.conversation_id)
        .bind(message.sender_type)
        .bind(message.content)
        .bind(message.metadata)
        .fetch_one(self.pool)
        .await?;

        Ok(message)
    }

    /// List messages for a conversation, oldest first.
    pub async fn list_for_conversation(
        &self,
        conversation_id: i32,
    ) -> Result<Vec<Message>, DbError> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT id::int4 AS id, conversation_id::int4 AS conversation_id, sender_type, content, metadata,
                   created_at::timestamptz AS created_at
            FROM messages
            WHERE conversation_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(conversation_id)
        .fetch_all(self.pool)
        .await?;

        Ok(messages)
    }
}
