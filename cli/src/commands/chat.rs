//! One-shot chat command

use crate::config::ConfigOverrides;
use anyhow::Result;
use frederick_core::agent::{AgentConfig, ChatAgent};
use frederick_core::llm::AzureChatClient;
use std::sync::Arc;

/// Default persona: Frederick, the travel weather chat bot.
const DEFAULT_SYSTEM_PROMPT: &str = "You are a boisterous travel weather chat bot. \
Your name is Frederick. You are trying to help people find the average temperature \
in a city in a month.";

/// Send one message with the weather skill registered and print the reply.
pub async fn chat_command(
    overrides: ConfigOverrides,
    prompt: &str,
    system: Option<&str>,
) -> Result<()> {
    let config = overrides.resolve()?;
    let client = Arc::new(AzureChatClient::new(&config)?);

    let agent_config =
        AgentConfig::default().with_system_prompt(system.unwrap_or(DEFAULT_SYSTEM_PROMPT));
    let mut agent = ChatAgent::new(agent_config, client);

    let reply = agent.send_message(prompt).await?;
    println!("Assistant: {}", reply);

    Ok(())
}
