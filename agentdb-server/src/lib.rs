//! agentdb-server: REST gateway over agents, conversations, messages and agent tools
//!
//! Every endpoint issues one parameterized statement against PostgreSQL and
//! serializes the result as JSON.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{Config, ConfigError};
pub use db::{create_pool, probe, DbError, PgStore, Store};
pub use http::{build_router, run_server, ApiError, AppState};
