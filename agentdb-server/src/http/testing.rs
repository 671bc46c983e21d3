//! Router test helpers

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tower::ServiceExt;

use super::{build_router, AppState};
use crate::db::memory::MemoryStore;
use crate::db::{DbError, Store, StoreResult};
use crate::models::{
    Agent, AgentTool, AgentToolUpdate, AgentUpdate, Conversation, Message, NewAgent,
    NewAgentTool, NewConversation, NewMessage, Stats,
};

/// Router over an empty in-memory store.
pub(crate) fn app() -> Router {
    build_router(AppState::new(MemoryStore::default()))
}

/// Router whose every database call fails.
pub(crate) fn broken_app() -> Router {
    build_router(AppState::new(FailingStore))
}

/// Send a request, returning the status and the JSON body (`Null` if empty).
pub(crate) async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, body)
}

/// Store standing in for an unreachable database.
pub(crate) struct FailingStore;

fn down<T>() -> StoreResult<T> {
    Err(DbError::Backend("connection refused".into()))
}

#[async_trait]
impl Store for FailingStore {
    async fn ping(&self) -> StoreResult<DateTime<Utc>> {
        down()
    }

    async fn list_agents(&self) -> StoreResult<Vec<Agent>> {
        down()
    }

    async fn get_agent(&self, _id: i32) -> StoreResult<Agent> {
        down()
    }

    async fn create_agent(&self, _agent: NewAgent) -> StoreResult<Agent> {
        down()
    }

    async fn update_agent(&self, _id: i32, _update: AgentUpdate) -> StoreResult<Agent> {
        down()
    }

    async fn delete_agent(&self, _id: i32) -> StoreResult<i32> {
        down()
    }

    async fn list_conversations(&self) -> StoreResult<Vec<Conversation>> {
        down()
    }

    async fn list_agent_conversations(&self, _agent_id: i32) -> StoreResult<Vec<Conversation>> {
        down()
    }

    async fn create_conversation(
        &self,
        _conversation: NewConversation,
    ) -> StoreResult<Conversation> {
        down()
    }

    async fn list_messages(&self, _conversation_id: i32) -> StoreResult<Vec<Message>> {
        down()
    }

    async fn create_message(&self, _message: NewMessage) -> StoreResult<Message> {
        down()
    }

    async fn list_agent_tools(&self) -> StoreResult<Vec<AgentTool>> {
        down()
    }

    async fn list_tools_for_agent(&self, _agent_id: i32) -> StoreResult<Vec<AgentTool>> {
        down()
    }

    async fn create_agent_tool(&self, _tool: NewAgentTool) -> StoreResult<AgentTool> {
        down()
    }

    async fn update_agent_tool(
        &self,
        _id: i32,
        _update: AgentToolUpdate,
    ) -> StoreResult<AgentTool> {
        down()
    }

    async fn delete_agent_tool(&self, _id: i32) -> StoreResult<i32> {
        down()
    }

    async fn stats(&self) -> StoreResult<Stats> {
        down()
    }
}
