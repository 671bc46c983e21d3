//! Conversation endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::Payload;
use crate::http::server::AppState;
use crate::models::{parse_id, Conversation, CreateConversationRequest, NewConversation};

const FETCH: &str = "fetch conversations";

/// GET /api/conversations - all conversations, newest first
async fn list_conversations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Conversation>>, ApiError> {
    let conversations = state
        .store()
        .list_conversations()
        .await
        .map_err(ApiError::failed(FETCH))?;

    Ok(Json(conversations))
}

/// GET /api/agents/{id}/conversations - one agent's conversations, newest first
async fn list_agent_conversations(
    State(state): State<Arc<AppState>>,
    Path(agent_id): Path<String>,
) -> Result<Json<Vec<Conversation>>, ApiError> {
    let agent_id = parse_id(&agent_id).map_err(ApiError::failed(FETCH))?;
    let conversations = state
        .store()
        .list_agent_conversations(agent_id)
        .await
        .map_err(ApiError::failed(FETCH))?;

    Ok(Json(conversations))
}

/// POST /api/conversations
async fn create_conversation(
    State(state): State<Arc<AppState>>,
    Payload(req): Payload<CreateConversationRequest>,
) -> Result<(StatusCode, Json<Conversation>), ApiError> {
    const ACTION: &str = "create conversation";
    let conversation = NewConversation::try_from(req).map_err(ApiError::failed(ACTION))?;
    let conversation = state
        .store()
        .create_conversation(conversation)
        .await
        .map_err(ApiError::failed(ACTION))?;

    Ok((StatusCode::CREATED, Json(conversation)))
}

/// Conversation routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/conversations",
            get(list_conversations).post(create_conversation),
        )
        .route("/agents/{id}/conversations", get(list_agent_conversations))
}
