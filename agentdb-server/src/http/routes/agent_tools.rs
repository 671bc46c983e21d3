//! Agent tool endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::Payload;
use crate::http::server::AppState;
use crate::models::{
    parse_id, AgentTool, AgentToolUpdate, CreateAgentToolRequest, Deleted, NewAgentTool,
    UpdateAgentToolRequest,
};

const FETCH: &str = "fetch agent tools";

/// GET /api/agent-tools - all tools, newest first
async fn list_agent_tools(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AgentTool>>, ApiError> {
    let tools = state
        .store()
        .list_agent_tools()
        .await
        .map_err(ApiError::failed(FETCH))?;

    Ok(Json(tools))
}

/// GET /api/agents/{id}/tools - one agent's tools, newest first
async fn list_tools_for_agent(
    State(state): State<Arc<AppState>>,
    Path(agent_id): Path<String>,
) -> Result<Json<Vec<AgentTool>>, ApiError> {
    let agent_id = parse_id(&agent_id).map_err(ApiError::failed(FETCH))?;
    let tools = state
        .store()
        .list_tools_for_agent(agent_id)
        .await
        .map_err(ApiError::failed(FETCH))?;

    Ok(Json(tools))
}

/// POST /api/agent-tools - attach a tool to an agent
async fn create_agent_tool(
    State(state): State<Arc<AppState>>,
    Payload(req): Payload<CreateAgentToolRequest>,
) -> Result<(StatusCode, Json<AgentTool>), ApiError> {
    const ACTION: &str = "add tool to agent";
    let tool = NewAgentTool::try_from(req).map_err(ApiError::failed(ACTION))?;
    let tool = state
        .store()
        .create_agent_tool(tool)
        .await
        .map_err(ApiError::failed(ACTION))?;

    Ok((StatusCode::CREATED, Json(tool)))
}

/// PUT /api/agent-tools/{id} - replace tool_config and enabled
async fn update_agent_tool(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Payload(req): Payload<UpdateAgentToolRequest>,
) -> Result<Json<AgentTool>, ApiError> {
    const ACTION: &str = "update agent tool";
    let id = parse_id(&id).map_err(ApiError::failed(ACTION))?;
    let update = AgentToolUpdate::try_from(req).map_err(ApiError::failed(ACTION))?;
    let tool = state
        .store()
        .update_agent_tool(id, update)
        .await
        .map_err(ApiError::failed(ACTION))?;

    Ok(Json(tool))
}

/// DELETE /api/agent-tools/{id}
async fn delete_agent_tool(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Deleted>, ApiError> {
    const ACTION: &str = "delete agent tool";
    let id = parse_id(&id).map_err(ApiError::failed(ACTION))?;
    let id = state
        .store()
        .delete_agent_tool(id)
        .await
        .map_err(ApiError::failed(ACTION))?;

    Ok(Json(Deleted::new("Agent tool deleted successfully", id)))
}

/// Agent tool routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/agent-tools",
            get(list_agent_tools).post(create_agent_tool),
        )
        .route(
            "/agent-tools/{id}",
            put(update_agent_tool).delete(delete_agent_tool),
        )
        .route("/agents/{id}/tools", get(list_tools_for_agent))
}
