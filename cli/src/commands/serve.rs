//! HTTP server command

use crate::config::ConfigOverrides;
use anyhow::Result;
use frederick_core::agent::AgentConfig;
use frederick_core::llm::AzureChatClient;
use frederick_core::server::{run_server, ServerState};
use std::sync::Arc;

/// Run the chat endpoint on the given address.
pub async fn serve_command(overrides: ConfigOverrides, bind: &str, port: u16) -> Result<()> {
    let config = overrides.resolve()?;
    let client = Arc::new(AzureChatClient::new(&config)?);

    let state = ServerState {
        client,
        agent_config: AgentConfig::default(),
    };

    tracing::info!("serving POST /chat on {}:{}", bind, port);
    run_server(state, bind, port).await?;

    Ok(())
}
