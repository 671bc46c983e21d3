//! Statistics endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{iso_timestamp, Stats};

/// Row counts plus the time they were read
#[derive(Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub counts: Stats,
    pub timestamp: String,
}

/// GET /api/stats
async fn stats(State(state): State<Arc<AppState>>) -> Result<Json<StatsResponse>, ApiError> {
    let counts = state
        .store()
        .stats()
        .await
        .map_err(ApiError::failed("fetch statistics"))?;

    Ok(Json(StatsResponse {
        counts,
        timestamp: iso_timestamp(Utc::now()),
    }))
}

/// Stats routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/stats", get(stats))
}
