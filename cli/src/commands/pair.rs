//! Wine pairing command

use crate::config::ConfigOverrides;
use anyhow::Result;
use frederick_core::llm::AzureChatClient;
use frederick_core::prompt::PromptFunction;
use serde_json::json;

/// Invoke the sommelier prompt function for the given wine.
pub async fn pair_command(overrides: ConfigOverrides, wine: &str) -> Result<()> {
    let config = overrides.resolve()?;
    let client = AzureChatClient::new(&config)?;

    let sommelier = PromptFunction::sommelier()?;
    let result = sommelier.invoke(&client, &json!({ "input": wine })).await?;
    println!("{}", result);

    Ok(())
}
