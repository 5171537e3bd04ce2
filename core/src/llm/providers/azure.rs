//! Azure OpenAI client implementation using the async-openai library

use crate::config::AzureOpenAiConfig;
use crate::error::{LlmError, Result};
use crate::llm::{
    ChatClient, ChatMessage, ChatOptions, ChatResponse, ContentBlock, FinishReason,
    MessageContent, MessageRole, ToolChoice, ToolDefinition, Usage,
};
use async_openai::{
    config::AzureConfig,
    types::{
        ChatCompletionMessageToolCall, ChatCompletionRequestAssistantMessage,
        ChatCompletionRequestAssistantMessageContent, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessage, ChatCompletionRequestToolMessage,
        ChatCompletionRequestToolMessageContent, ChatCompletionRequestUserMessage,
        ChatCompletionTool, ChatCompletionToolChoiceOption, ChatCompletionToolType,
        CreateChatCompletionRequestArgs, FunctionObject,
    },
    Client,
};
use async_trait::async_trait;
use serde_json::Value;

/// Chat completion client for an Azure OpenAI deployment
pub struct AzureChatClient {
    client: Client<AzureConfig>,
    deployment: String,
    // Execution settings from the resolved config, used when the caller
    // passes no per-request options.
    default_options: ChatOptions,
}

impl AzureChatClient {
    /// Create a new client from resolved configuration
    pub fn new(config: &AzureOpenAiConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(crate::error::Error::Llm(LlmError::Authentication {
                message: "No API key found for Azure OpenAI".to_string(),
            }));
        }

        let azure_config = AzureConfig::new()
            .with_api_base(&config.endpoint)
            .with_api_key(&config.api_key)
            .with_deployment_id(&config.deployment)
            .with_api_version(&config.api_version);

        Ok(Self {
            client: Client::with_config(azure_config),
            deployment: config.deployment.clone(),
            default_options: ChatOptions::from_params(&config.params),
        })
    }

    /// Convert our internal message format to async-openai request messages
    fn convert_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<Vec<ChatCompletionRequestMessage>> {
        let mut converted = Vec::new();

        for message in messages {
            match message.role {
                MessageRole::System => {
                    let content = extract_text_content(&message.content);
                    converted.push(ChatCompletionRequestMessage::System(
                        ChatCompletionRequestSystemMessage {
                            content: content.into(),
                            name: None,
                        },
                    ));
                }
                MessageRole::User => {
                    let content = extract_text_content(&message.content);
                    converted.push(ChatCompletionRequestMessage::User(
                        ChatCompletionRequestUserMessage {
                            content: content.into(),
                            name: None,
                        },
                    ));
                }
                MessageRole::Assistant => match &message.content {
                    MessageContent::Text(text) => {
                        converted.push(ChatCompletionRequestMessage::Assistant(
                            ChatCompletionRequestAssistantMessage {
                                content: Some(ChatCompletionRequestAssistantMessageContent::Text(
                                    text.clone(),
                                )),
                                ..Default::default()
                            },
                        ));
                    }
                    MessageContent::Blocks(blocks) => {
                        let mut content = String::new();
                        let mut tool_calls = Vec::new();

                        for block in blocks {
                            match block {
                                ContentBlock::Text { text } => {
                                    if !content.is_empty() {
                                        content.push('\n');
                                    }
                                    content.push_str(text);
                                }
                                ContentBlock::ToolUse { id, name, input } => {
                                    tool_calls.push(ChatCompletionMessageToolCall {
                                        id: id.clone(),
                                        r#type: ChatCompletionToolType::Function,
                                        function: async_openai::types::FunctionCall {
                                            name: name.clone(),
                                            arguments: input.to_string(),
                                        },
                                    });
                                }
                                ContentBlock::ToolResult { .. } => {}
                            }
                        }

                        converted.push(ChatCompletionRequestMessage::Assistant(
                            ChatCompletionRequestAssistantMessage {
                                content: if content.is_empty() {
                                    None
                                } else {
                                    Some(ChatCompletionRequestAssistantMessageContent::Text(
                                        content,
                                    ))
                                },
                                tool_calls: if tool_calls.is_empty() {
                                    None
                                } else {
                                    Some(tool_calls)
                                },
                                ..Default::default()
                            },
                        ));
                    }
                },
                MessageRole::Tool => {
                    // Each tool result becomes its own tool message
                    let mut pushed_any = false;
                    if let MessageContent::Blocks(blocks) = &message.content {
                        for block in blocks {
                            if let ContentBlock::ToolResult {
                                tool_use_id,
                                content,
                                ..
                            } = block
                            {
                                converted.push(ChatCompletionRequestMessage::Tool(
                                    ChatCompletionRequestToolMessage {
                                        content: ChatCompletionRequestToolMessageContent::Text(
                                            content.clone(),
                                        ),
                                        tool_call_id: tool_use_id.clone(),
                                    },
                                ));
                                pushed_any = true;
                            }
                        }
                    }
                    if !pushed_any {
                        return Err((LlmError::InvalidRequest {
                            message: "Tool message must contain a ToolResult block".to_string(),
                        })
                        .into());
                    }
                }
            }
        }

        Ok(converted)
    }

    /// Convert our tool definitions to async-openai format
    fn convert_tools(&self, tools: Vec<ToolDefinition>) -> Vec<ChatCompletionTool> {
        tools
            .into_iter()
            .map(|tool| ChatCompletionTool {
                r#type: ChatCompletionToolType::Function,
                function: FunctionObject {
                    name: tool.function.name,
                    description: Some(tool.function.description),
                    parameters: Some(tool.function.parameters),
                    strict: None,
                },
            })
            .collect()
    }

    /// Convert an async-openai response to our internal format.
    ///
    /// A response with no choices maps to `LlmError::NoResponse` so callers
    /// get a deterministic error instead of an index panic.
    fn convert_response(
        &self,
        response: async_openai::types::CreateChatCompletionResponse,
    ) -> Result<ChatResponse> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::NoResponse)?;

        let message_content = if let Some(content) = choice.message.content {
            if let Some(tool_calls) = choice.message.tool_calls {
                let mut blocks = vec![ContentBlock::Text { text: content }];
                blocks.extend(tool_calls.into_iter().map(tool_call_block));
                MessageContent::Blocks(blocks)
            } else {
                MessageContent::Text(content)
            }
        } else if let Some(tool_calls) = choice.message.tool_calls {
            MessageContent::Blocks(tool_calls.into_iter().map(tool_call_block).collect())
        } else {
            MessageContent::Text(String::new())
        };

        let message = ChatMessage {
            role: MessageRole::Assistant,
            content: message_content,
        };

        let usage = response.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        let finish_reason = choice.finish_reason.map(|reason| match reason {
            async_openai::types::FinishReason::Stop => FinishReason::Stop,
            async_openai::types::FinishReason::Length => FinishReason::Length,
            async_openai::types::FinishReason::ToolCalls => FinishReason::ToolCalls,
            async_openai::types::FinishReason::ContentFilter => FinishReason::ContentFilter,
            async_openai::types::FinishReason::FunctionCall => FinishReason::ToolCalls,
        });

        Ok(ChatResponse {
            message,
            usage,
            model: response.model,
            finish_reason,
        })
    }
}

/// Convert an async-openai tool call to a ToolUse content block
fn tool_call_block(tool_call: ChatCompletionMessageToolCall) -> ContentBlock {
    let function = tool_call.function;
    let args: Value = serde_json::from_str(&function.arguments)
        .unwrap_or_else(|_| Value::String(function.arguments.clone()));

    ContentBlock::ToolUse {
        id: tool_call.id,
        name: function.name,
        input: args,
    }
}

/// Extract plain text from message content
fn extract_text_content(content: &MessageContent) -> String {
    match content {
        MessageContent::Text(text) => text.clone(),
        MessageContent::Blocks(blocks) => blocks
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

#[async_trait]
impl ChatClient for AzureChatClient {
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        tools: Option<Vec<ToolDefinition>>,
        options: Option<ChatOptions>,
    ) -> Result<ChatResponse> {
        let converted_messages = self.convert_messages(messages)?;
        let converted_tools = tools.map(|t| self.convert_tools(t));
        let has_tools = converted_tools.is_some();

        if let Some(ref tools) = converted_tools {
            tracing::debug!("chat completion request with {} tools enabled", tools.len());
        }

        let mut request_builder = CreateChatCompletionRequestArgs::default();
        request_builder.model(&self.deployment);
        request_builder.messages(converted_messages);

        if let Some(tools) = converted_tools {
            request_builder.tools(tools);
        }

        let opts = options.unwrap_or_else(|| self.default_options.clone());
        if let Some(max_tokens) = opts.max_tokens {
            request_builder.max_tokens(max_tokens);
        }
        if let Some(temperature) = opts.temperature {
            request_builder.temperature(temperature);
        }
        if let Some(top_p) = opts.top_p {
            request_builder.top_p(top_p);
        }
        // tool_choice is only valid when tools are present
        if has_tools {
            if let Some(tool_choice) = opts.tool_choice {
                request_builder.tool_choice(match tool_choice {
                    ToolChoice::Auto => ChatCompletionToolChoiceOption::Auto,
                    ToolChoice::None => ChatCompletionToolChoiceOption::None,
                    ToolChoice::Required => ChatCompletionToolChoiceOption::Required,
                });
            }
        }

        let request = request_builder.build().map_err(|e| {
            tracing::error!("failed to build chat completion request: {}", e);
            LlmError::InvalidRequest {
                message: format!("Failed to build request: {}", e),
            }
        })?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            tracing::error!("Azure OpenAI call failed: {}", e);
            LlmError::Api {
                message: e.to_string(),
            }
        })?;

        let response = self.convert_response(response)?;

        if let MessageContent::Blocks(blocks) = &response.message.content {
            for block in blocks {
                if let ContentBlock::ToolUse { id, name, .. } = block {
                    tracing::debug!("tool call requested: {} (id: {})", name, id);
                }
            }
        }

        Ok(response)
    }

    fn model_name(&self) -> &str {
        &self.deployment
    }

    fn provider_name(&self) -> &str {
        "azure_openai"
    }
}
