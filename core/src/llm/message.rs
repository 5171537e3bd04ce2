//! Chat message structures and conversation history

use serde::{Deserialize, Serialize};

/// Represents a message in a chat conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,

    /// Content of the message
    pub content: MessageContent,
}

/// Role of the message sender
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System message (instructions)
    System,

    /// User message (human input)
    User,

    /// Assistant message (model response)
    Assistant,

    /// Tool message (tool execution result)
    Tool,
}

/// Content of a message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Simple text content
    Text(String),

    /// Structured content with text and tool interactions
    Blocks(Vec<ContentBlock>),
}

/// A block of content within a message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Text content
    Text { text: String },

    /// Tool invocation requested by the model
    ToolUse {
        /// Unique identifier for this tool use
        id: String,
        /// Name of the tool to invoke
        name: String,
        /// Input parameters for the tool
        input: serde_json::Value,
    },

    /// Result of a tool invocation
    ToolResult {
        /// ID of the tool use this is a result for
        tool_use_id: String,
        /// Whether the tool execution failed
        is_error: Option<bool>,
        /// Result content
        content: String,
    },
}

impl ChatMessage {
    /// Create a new system message
    pub fn system<S: Into<String>>(content: S) -> Self {
        Self {
            role: MessageRole::System,
            content: MessageContent::Text(content.into()),
        }
    }

    /// Create a new user message
    pub fn user<S: Into<String>>(content: S) -> Self {
        Self {
            role: MessageRole::User,
            content: MessageContent::Text(content.into()),
        }
    }

    /// Create a new assistant message
    pub fn assistant<S: Into<String>>(content: S) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: MessageContent::Text(content.into()),
        }
    }

    /// Create a tool result message for the given tool use
    pub fn tool_result<S: Into<String>>(tool_use_id: S, is_error: bool, content: S) -> Self {
        Self {
            role: MessageRole::Tool,
            content: MessageContent::Blocks(vec![ContentBlock::ToolResult {
                tool_use_id: tool_use_id.into(),
                is_error: Some(is_error),
                content: content.into(),
            }]),
        }
    }

    /// Get the concatenated text content of the message
    pub fn get_text(&self) -> Option<String> {
        match &self.content {
            MessageContent::Text(text) => Some(text.clone()),
            MessageContent::Blocks(blocks) => {
                let text_parts: Vec<&str> = blocks
                    .iter()
                    .filter_map(|block| match block {
                        ContentBlock::Text { text } => Some(text.as_str()),
                        _ => None,
                    })
                    .collect();
                if text_parts.is_empty() {
                    None
                } else {
                    Some(text_parts.join("\n"))
                }
            }
        }
    }

    /// Check if the message contains a tool invocation request
    pub fn has_tool_use(&self) -> bool {
        match &self.content {
            MessageContent::Text(_) => false,
            MessageContent::Blocks(blocks) => blocks
                .iter()
                .any(|block| matches!(block, ContentBlock::ToolUse { .. })),
        }
    }

    /// Extract tool use blocks from the message
    pub fn get_tool_uses(&self) -> Vec<&ContentBlock> {
        match &self.content {
            MessageContent::Text(_) => Vec::new(),
            MessageContent::Blocks(blocks) => blocks
                .iter()
                .filter(|block| matches!(block, ContentBlock::ToolUse { .. }))
                .collect(),
        }
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        MessageContent::Text(text)
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        MessageContent::Text(text.to_string())
    }
}

/// An ordered, append-only conversation history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatHistory {
    messages: Vec<ChatMessage>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a system message
    pub fn add_system_message<S: Into<String>>(&mut self, content: S) {
        self.messages.push(ChatMessage::system(content));
    }

    /// Append a user message
    pub fn add_user_message<S: Into<String>>(&mut self, content: S) {
        self.messages.push(ChatMessage::user(content));
    }

    /// Append an assistant message
    pub fn add_assistant_message<S: Into<String>>(&mut self, content: S) {
        self.messages.push(ChatMessage::assistant(content));
    }

    /// Append an arbitrary message
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Messages in append order
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether the history starts with a system message
    pub fn has_system_message(&self) -> bool {
        matches!(
            self.messages.first(),
            Some(ChatMessage {
                role: MessageRole::System,
                ..
            })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_preserves_append_order() {
        let mut history = ChatHistory::new();
        history.add_system_message("You are a travel weather chat bot.");
        history.add_user_message("What is the average temperature in San Francisco in June?");
        history.add_assistant_message("75 degrees.");

        let roles: Vec<MessageRole> = history.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![MessageRole::System, MessageRole::User, MessageRole::Assistant]
        );
        assert_eq!(
            history.messages()[2].get_text().as_deref(),
            Some("75 degrees.")
        );
    }

    #[test]
    fn detects_tool_use_blocks() {
        let message = ChatMessage {
            role: MessageRole::Assistant,
            content: MessageContent::Blocks(vec![
                ContentBlock::Text {
                    text: "Let me check.".to_string(),
                },
                ContentBlock::ToolUse {
                    id: "call_1".to_string(),
                    name: "travel_weather".to_string(),
                    input: serde_json::json!({"city": "Lisbon", "month": "May"}),
                },
            ]),
        };

        assert!(message.has_tool_use());
        assert_eq!(message.get_tool_uses().len(), 1);
        assert_eq!(message.get_text().as_deref(), Some("Let me check."));
    }

    #[test]
    fn plain_text_message_has_no_tool_use() {
        let message = ChatMessage::assistant("hello");
        assert!(!message.has_tool_use());
        assert!(message.get_tool_uses().is_empty());
    }
}
