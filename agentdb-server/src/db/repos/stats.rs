//! Table statistics

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::Stats;

/// Row-count repository
pub struct StatsRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> StatsRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Count rows in all four tables with one statement, so the numbers
    /// come from a single snapshot.
    pub async fn counts(&self) -> Result<Stats, DbError> {
        let stats = sqlx::query_as::<_, Stats>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM agents) AS agents,
                (SELECT COUNT(*) FROM conversations) AS conversations,
                (SELECT COUNT(*) FROM messages) AS messages,
                (SELECT COUNT(*) FROM agent_tools) AS tools
            "#,
        )
        .fetch_one(self.pool)
        .await?;

        Ok(stats)
    }
}
