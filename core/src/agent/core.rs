//! ChatAgent and the tool-invocation loop

use super::config::AgentConfig;
use crate::error::{AgentError, Result};
use crate::llm::{ChatClient, ChatHistory, ChatMessage, ContentBlock};
use crate::tools::{ToolCall, ToolExecutor, ToolRegistry};
use std::sync::Arc;

/// A chat agent: one conversation, one client, a set of registered tools.
///
/// `send_message` runs the invocation loop: the conversation and the tool
/// definitions go to the model; if the reply requests tool calls they are
/// executed locally and their results appended before resending; otherwise
/// the assistant's text is returned. Transport and authentication errors
/// propagate to the caller unmodified.
pub struct ChatAgent {
    config: AgentConfig,
    client: Arc<dyn ChatClient>,
    executor: ToolExecutor,
    history: ChatHistory,
}

impl ChatAgent {
    /// Create an agent over an existing client, with tools taken from the
    /// default registry according to the agent configuration.
    pub fn new(config: AgentConfig, client: Arc<dyn ChatClient>) -> Self {
        let registry = ToolRegistry::default();
        let executor = registry.create_executor(&config.tools);
        Self::with_executor(config, client, executor)
    }

    /// Create an agent with a custom tool executor.
    pub fn with_executor(
        config: AgentConfig,
        client: Arc<dyn ChatClient>,
        executor: ToolExecutor,
    ) -> Self {
        let mut history = ChatHistory::new();
        if let Some(prompt) = &config.system_prompt {
            history.add_system_message(prompt.clone());
        }

        Self {
            config,
            client,
            executor,
            history,
        }
    }

    /// Get agent configuration
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// The conversation so far, in append order.
    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    /// Send a user message and run the invocation loop until the model
    /// replies with text.
    pub async fn send_message(&mut self, text: &str) -> Result<String> {
        self.history.add_user_message(text);

        let tool_definitions = self.executor.get_tool_definitions();
        let tools = if tool_definitions.is_empty() {
            None
        } else {
            Some(tool_definitions)
        };

        for step in 0..self.config.max_steps {
            tracing::debug!(step, "sending chat completion request");

            let response = self
                .client
                .chat_completion(self.history.messages().to_vec(), tools.clone(), None)
                .await?;

            self.history.push(response.message.clone());

            if !response.message.has_tool_use() {
                return Ok(response.message.get_text().unwrap_or_default());
            }

            for tool_use in response.message.get_tool_uses() {
                if let ContentBlock::ToolUse { id, name, input } = tool_use {
                    tracing::debug!(tool = %name, id = %id, "executing requested tool");

                    let call = ToolCall {
                        id: id.clone(),
                        name: name.clone(),
                        parameters: input.clone(),
                    };
                    let result = self.executor.execute(call).await?;

                    self.history.push(ChatMessage::tool_result(
                        id.clone(),
                        !result.success,
                        result.content,
                    ));
                }
            }
            // Tool results are in the history now; the next iteration lets
            // the model fold them into its reply.
        }

        Err(AgentError::MaxStepsExceeded {
            max_steps: self.config.max_steps,
        }
        .into())
    }
}
