//! API error types with IntoResponse
//!
//! Errors are converted to `{"error": "..."}` JSON bodies. Database causes
//! are logged, never echoed to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Targeted statement matched no row (404)
    NotFound { resource: &'static str },

    /// Any failed database operation (500, logged)
    OperationFailed {
        action: &'static str,
        source: DbError,
    },
}

impl ApiError {
    /// Map a storage error for the operation described by `action`
    /// (e.g. `"fetch agent"`).
    ///
    /// ```ignore
    /// let agent = store.get_agent(id).await.map_err(ApiError::failed("fetch agent"))?;
    /// ```
    pub fn failed(action: &'static str) -> impl FnOnce(DbError) -> Self {
        move |source| match source {
            DbError::NotFound { resource, .. } => Self::NotFound { resource },
            source => Self::OperationFailed { action, source },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::OperationFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::NotFound { resource } => format!("{} not found", resource),
            Self::OperationFailed { action, source } => {
                tracing::error!(error = %source, "Failed to {}", action);
                format!("Failed to {}", action)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
