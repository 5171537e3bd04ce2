//! HTTP surface: a single chat endpoint plus a health probe.

use crate::agent::{AgentConfig, ChatAgent};
use crate::error::Result;
use crate::llm::ChatClient;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Shared state for the chat server.
///
/// One client is shared across all requests without synchronization; it is
/// stateless per call. Conversation state is request-local.
#[derive(Clone)]
pub struct ServerState {
    pub client: Arc<dyn ChatClient>,
    pub agent_config: AgentConfig,
}

/// Request body for `POST /chat`
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
}

/// Response body for `POST /chat`
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Build the router for the chat server.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/chat", post(chat))
        .with_state(state)
}

/// Run the chat server; binds to `bind:port` and serves until the task is
/// dropped or the process exits.
pub async fn run_server(state: ServerState, bind: &str, port: u16) -> Result<()> {
    let app = router(state);

    let bind_addr = format!("{}:{}", bind, port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("chat server listening on {}", bind_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| crate::error::Error::Generic(format!("server exited: {}", e)))?;
    Ok(())
}

/// GET / returns a simple health JSON (for probes).
async fn health(State(state): State<ServerState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "running",
        "model": state.client.model_name(),
        "provider": state.client.provider_name(),
    }))
}

/// POST /chat — runs one conversation turn and returns the assistant reply.
///
/// Each request gets a fresh agent around the shared client, so there is no
/// cross-request conversation state. Upstream failures map to 502 with the
/// error text.
async fn chat(
    State(state): State<ServerState>,
    Json(request): Json<ChatRequest>,
) -> std::result::Result<Json<ChatReply>, (StatusCode, String)> {
    let mut agent = ChatAgent::new(state.agent_config.clone(), state.client.clone());

    match agent.send_message(&request.prompt).await {
        Ok(reply) => Ok(Json(ChatReply { reply })),
        Err(e) => {
            tracing::warn!("chat request failed: {}", e);
            Err((StatusCode::BAD_GATEWAY, e.to_string()))
        }
    }
}
