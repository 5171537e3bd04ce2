//! Integration test: start the chat server on a free port with a mock
//! client, assert the health probe and the POST /chat round-trip. Does not
//! require Azure credentials or network access beyond loopback.

use async_trait::async_trait;
use frederick_core::agent::AgentConfig;
use frederick_core::llm::{
    ChatClient, ChatMessage, ChatOptions, ChatResponse, ToolDefinition,
};
use frederick_core::server::{run_server, ServerState};
use std::sync::Arc;
use std::time::Duration;

fn free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind free port");
    listener.local_addr().expect("local_addr").port()
}

/// Echoes the last user message back, prefixed.
struct EchoClient;

#[async_trait]
impl ChatClient for EchoClient {
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        _tools: Option<Vec<ToolDefinition>>,
        _options: Option<ChatOptions>,
    ) -> frederick_core::Result<ChatResponse> {
        let last = messages
            .last()
            .and_then(|m| m.get_text())
            .unwrap_or_default();
        Ok(ChatResponse {
            message: ChatMessage::assistant(format!("echo: {last}")),
            usage: None,
            model: "echo-model".to_string(),
            finish_reason: None,
        })
    }

    fn model_name(&self) -> &str {
        "echo-model"
    }

    fn provider_name(&self) -> &str {
        "test"
    }
}

async fn wait_for_health(client: &reqwest::Client, url: &str) {
    for _ in 0..100 {
        if let Ok(resp) = client.get(url).send().await {
            if resp.status().is_success() {
                let json: serde_json::Value = resp.json().await.expect("parse JSON");
                assert_eq!(
                    json.get("status").and_then(|v| v.as_str()),
                    Some("running")
                );
                assert_eq!(
                    json.get("model").and_then(|v| v.as_str()),
                    Some("echo-model")
                );
                return;
            }
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("server did not become healthy at {url}");
}

#[tokio::test]
async fn chat_endpoint_round_trips_prompt_to_reply() {
    let port = free_port();
    let state = ServerState {
        client: Arc::new(EchoClient),
        agent_config: AgentConfig::default().with_tools(Vec::new()),
    };

    let server = tokio::spawn(async move {
        let _ = run_server(state, "127.0.0.1", port).await;
    });

    let client = reqwest::Client::new();
    wait_for_health(&client, &format!("http://127.0.0.1:{port}/")).await;

    let resp = client
        .post(format!("http://127.0.0.1:{port}/chat"))
        .json(&serde_json::json!({"prompt": "hello"}))
        .send()
        .await
        .expect("POST /chat");
    assert!(resp.status().is_success());

    let body: serde_json::Value = resp.json().await.expect("parse JSON");
    assert_eq!(
        body.get("reply").and_then(|v| v.as_str()),
        Some("echo: hello")
    );

    server.abort();
}

#[tokio::test]
async fn chat_endpoint_rejects_malformed_body() {
    let port = free_port();
    let state = ServerState {
        client: Arc::new(EchoClient),
        agent_config: AgentConfig::default().with_tools(Vec::new()),
    };

    let server = tokio::spawn(async move {
        let _ = run_server(state, "127.0.0.1", port).await;
    });

    let client = reqwest::Client::new();
    wait_for_health(&client, &format!("http://127.0.0.1:{port}/")).await;

    let resp = client
        .post(format!("http://127.0.0.1:{port}/chat"))
        .json(&serde_json::json!({"wrong_field": true}))
        .send()
        .await
        .expect("POST /chat");
    assert!(resp.status().is_client_error());

    server.abort();
}
