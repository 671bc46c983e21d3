//! Database connection pool management
//!
//! The pool connects lazily so an unreachable database never blocks startup;
//! [`probe`] reports connectivity instead.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use super::Store;

/// Maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Create a PostgreSQL connection pool.
///
/// Without a URL the connection options come from the libpq-style
/// environment (`PGHOST`, `PGPORT`, `PGUSER`, `PGPASSWORD`, `PGDATABASE`).
///
/// # Errors
///
/// Returns an error if `database_url` cannot be parsed. No connection is
/// attempted here.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(Some("postgres://localhost/agentdb"))?;
/// ```
pub fn create_pool(database_url: Option<&str>) -> Result<PgPool, sqlx::Error> {
    let options = match database_url {
        Some(url) => url.parse::<PgConnectOptions>()?,
        None => PgConnectOptions::new(),
    };

    Ok(PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_lazy_with(options))
}

/// Run the startup liveness probe and log the outcome.
///
/// Never fails: a database that is down at startup is logged and the server
/// keeps going, surfacing errors per request.
pub async fn probe(store: &dyn Store) -> bool {
    match store.ping().await {
        Ok(now) => {
            tracing::info!(%now, "Database connected successfully");
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "Database connection error");
            false
        }
    }
}
