//! Agent endpoints

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
use crate::models::{parse_id, Agent, AgentUpdate, CreateAgentRequest, Deleted, NewAgent};

/// GET /api/agents - all agents, newest first
async fn list_agents(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Agent>>, ApiError> {
    let agents = state
        .store()
        .list_agents()
        .await
        .map_err(ApiError::failed("fetch agents"))?;

    Ok(Json(agents))
}

/// GET /api/agents/{id}
async fn get_agent(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Agent>, ApiError> {
    const ACTION: &str = "fetch agent";
    let id = parse_id(&id).map_err(ApiError::failed(ACTION))?;
    let agent = state
        .store()
        .get_agent(id)
        .await
        .map_err(ApiError::failed(ACTION))?;

    Ok(Json(agent))
}

/// POST /api/agents
async fn create_agent(
    State(state): State<Arc<AppState>>,
    Payload(req): Payload<CreateAgentRequest>,
) -> Result<(StatusCode, Json<Agent>), ApiError> {
    let agent = state
        .store()
        .create_agent(NewAgent::from(req))
        .await
        .map_err(ApiError::failed("create agent"))?;

    Ok((StatusCode::CREATED, Json(agent)))
}

/// PUT /api/agents/{id} - replace name, description, capabilities and status
async fn update_agent(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Payload(update): Payload<AgentUpdate>,
) -> Result<Json<Agent>, ApiError> {
    const ACTION: &str = "update agent";
    let id = parse_id(&id).map_err(ApiError::failed(ACTION))?;
    let agent = state
        .store()
        .update_agent(id, update)
        .await
        .map_err(ApiError::failed(ACTION))?;

    Ok(Json(agent))
}

/// DELETE /api/agents/{id}
async fn delete_agent(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Deleted>, ApiError> {
    const ACTION: &str = "delete agent";
    let id = parse_id(&id).map_err(ApiError::failed(ACTION))?;
    let id = state
        .store()
        .delete_agent(id)
        .await
        .map_err(ApiError::failed(ACTION))?;

    Ok(Json(Deleted::new("Agent deleted successfully", id)))
}

/// Agent routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/agents", get(list_agents).post(create_agent))
        .route(
            "/agents/{id}",
            get(get_agent).put(update_agent).delete(delete_agent),
        )
}
