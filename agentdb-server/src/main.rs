//! agentdb-server binary
//!
//! Reads configuration from the environment (and `.env`), probes the
//! database once, then serves the API until Ctrl+C or SIGTERM.

use anyhow::{Context, Result};

use agentdb_server::{create_pool, probe, run_server, AppState, Config, PgStore};

mod logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Existing environment variables win over .env
    dotenvy::dotenv().ok();
    logging::init()?;

    let config = Config::from_env().context("Invalid configuration")?;

    let pool = create_pool(config.database_url.as_deref())
        .context("Invalid DATABASE_URL")?;
    let store = PgStore::new(pool);

    // Logged either way; a database that is down does not stop startup
    probe(&store).await;

    run_server(AppState::new(store), config.bind_addr())
        .await
        .context("Server error")?;

    Ok(())
}
