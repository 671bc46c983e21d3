//! Agent tool repository

use sqlx::PgPool;

use crate::db::{resource, DbError};
use crate::models::{AgentTool, AgentToolUpdate, NewAgentTool};

/// Agent tool repository
pub struct AgentToolRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> AgentToolRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all agent tools, newest first.
    pub async fn list(&self) -> Result<Vec<AgentTool>, DbError> {
        let tools = sqlx::query_as::<_, AgentTool>(
            r#"
            SELECT id::int4 AS id, agent_id::int4 AS agent_id, tool_name, tool_config, enabled,
                   created_at::timestamptz AS created_at, updated_at::timestamptz AS updated_at
            FROM agent_tools
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(tools)
    }

    /// List one agent's tools, newest first.
    pub async fn list_for_agent(&self, agent_id: i32) -> Result<Vec<AgentTool>, DbError> {
        let tools = sqlx::query_as::<_, AgentTool>(
            r#"
            SELECT id::int4 AS id, agent_id::int4 AS agent_id, tool_name, tool_config, enabled,
                   created_at::timestamptz AS created_at, updated_at::timestamptz AS updated_at
            FROM agent_tools
            WHERE agent_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(agent_id)
        .fetch_all(self.pool)
        .await?;

        Ok(tools)
    }

    pub async fn create(&self, tool: NewAgentTool) -> Result<AgentTool, DbError> {
        let tool = sqlx::query_as::<_, AgentTool>(
            r#"
            INSERT INTO agent_tools (agent_id, tool_name, tool_config, enabled, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING id::int4 AS id, agent_id::int4 AS agent_id, tool_name, tool_config, enabled,
                      created_at::timestamptz AS created_at, updated_at::timestamptz AS updated_at
            "#,
        )
        .bind(tool.agent_id)
        .bind(tool.tool_name)
        .bind(tool.tool_config)
        .bind(tool.enabled)
        .fetch_one(self.pool)
        .await?;

        Ok(tool)
    }

    pub async fn update(&self, id: i32, update: AgentToolUpdate) -> Result<AgentTool, DbError> {
        sqlx::query_as::<_, AgentTool>(
            r#"
            UPDATE agent_tools
            SET tool_config = $1, enabled = $2, updated_at = NOW()
            WHERE id = $3
            RETURNING id::int4 AS id, agent_id::int4 AS agent_id, tool_name, tool_config, enabled,
                      created_at::timestamptz AS created_at, updated_at::timestamptz AS updated_at
            "#,
        )
        .bind(update.tool_config)
        .bind(update.enabled)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found(resource::AGENT_TOOL, id))
    }

    pub async fn delete(&self, id: i32) -> Result<i32, DbError> {
        sqlx::query_scalar::<_, i32>("DELETE FROM agent_tools WHERE id = $1 RETURNING id::int4")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found(resource::AGENT_TOOL, id))
    }
}
