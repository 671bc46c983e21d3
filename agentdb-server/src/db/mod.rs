//! Database layer - connection pool, storage port and repositories
//!
//! - One parameterized statement per operation, `$n` placeholders only
//! - "Not found" means the targeted statement returned no row; there is no
//!   separate existence check
//! - Constraint enforcement (NOT NULL, foreign keys) is left to PostgreSQL

pub mod error;
#[cfg(test)]
pub mod memory;
pub mod pool;
pub mod repos;
pub mod store;

pub use error::DbError;
pub use pool::{create_pool, probe};
pub use repos::PgStore;
pub use store::{Store, StoreResult};

/// Resource names used in not-found responses
pub mod resource {
    pub const AGENT: &str = "Agent";
    pub const AGENT_TOOL: &str = "Agent tool";
}
