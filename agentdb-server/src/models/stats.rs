//! Row counts across all tables

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Exact row counts, read in a single statement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Stats {
    pub agents: i64,
    pub conversations: i64,
    pub messages: i64,
    pub tools: i64,
}
