//! Agent repository
//!
//! - update: full replace of name, description, capabilities and status
//! - update/delete: `RETURNING` decides not-found, no check-then-write

use sqlx::PgPool;

use crate::db::{resource, DbError};
use crate::models::{Agent, AgentUpdate, NewAgent};

/// Agent repository
pub struct AgentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> AgentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all agents, newest first.
    pub async fn list(&self) -> Result<Vec<Agent>, DbError> {
        let agents = sqlx::query_as::<_, Agent>(
            r#"
            SELECT id::int4 AS id, name, description, capabilities, status,
                   created_at::timestamptz AS created_at, updated_at::timestamptz AS updated_at
            FROM agents
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(agents)
    }

    pub async fn get(&self, id: i32) -> Result<Agent, DbError> {
        sqlx::query_as::<_, Agent>(
            r#"
            SELECT id::int4 AS id, name, description, capabilities, status,
                   created_at::timestamptz AS created_at, updated_at::timestamptz AS updated_at
            FROM agents
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found(resource::AGENT, id))
    }

    pub async fn create(&self, agent: NewAgent) -> Result<Agent, DbError> {
        let agent = sqlx::query_as::<_, Agent>(
            r#"
            INSERT INTO agents (name, description, capabilities, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING id::int4 AS id, name, description, capabilities, status,
                      created_at::timestamptz AS created_at, updated_at::timestamptz AS updated_at
            "#,
        )
        .bind(agent.name)
        .bind(agent.description)
        .bind(agent.capabilities)
        .bind(agent.status)
        .fetch_one(self.pool)
        .await?;

        Ok(agent)
    }

    pub async fn update(&self, id: i32, update: AgentUpdate) -> Result<Agent, DbError> {
        sqlx::query_as::<_, Agent>(
            r#"
            UPDATE agents
            SET name = $1, description = $2, capabilities = $3, status = $4, updated_at = NOW()
            WHERE id = $5
            RETURNING id::int4 AS id, name, description, capabilities, status,
                      created_at::timestamptz AS created_at, updated_at::timestamptz AS updated_at
            "#,
        )
        .bind(update.name)
        .bind(update.description)
        .bind(update.capabilities)
        .bind(update.status)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found(resource::AGENT, id))
    }

    pub async fn delete(&self, id: i32) -> Result<i32, DbError> {
        sqlx::query_scalar::<_, i32>("DELETE FROM agents WHERE id = $1 RETURNING id::int4")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found(resource::AGENT, id))
    }
}
