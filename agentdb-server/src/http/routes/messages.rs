//! Message endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::Payload;
use crate::http::server::AppState;
use crate::models::{parse_id, CreateMessageRequest, Message, NewMessage};

/// GET /api/conversations/{id}/messages - oldest first
async fn list_messages(
    State(state): State<Arc<AppState>>,
    Path(conversation_id): Path<String>,
) -> Result<Json<Vec<Message>>, ApiError> {
    const ACTION: &str = "fetch messages";
    let conversation_id = parse_id(&conversation_id).map_err(ApiError::failed(ACTION))?;
    let messages = state
        .store()
        .list_messages(conversation_id)
        .await
        .map_err(ApiError::failed(ACTION))?;

    Ok(Json(messages))
}

/// POST /api/messages
async fn create_message(
    State(state): State<Arc<AppState>>,
    Payload(req): Payload<CreateMessageRequest>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    const ACTION: &str = "create message";
    let message = NewMessage::try_from(req).map_err(ApiError::failed(ACTION))?;
    let message = state
        .store()
        .create_message(message)
        .await
        .map_err(ApiError::failed(ACTION))?;

    Ok((StatusCode::CREATED, Json(message)))
}

/// Message routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/conversations/{id}/messages", get(list_messages))
        .route("/messages", post(create_message))
}
