//! Chat client abstractions and implementations

pub mod client;
pub mod message;
pub mod providers;

pub use client::{
    ChatClient, ChatOptions, ChatResponse, FinishReason, FunctionDefinition, ToolChoice,
    ToolDefinition, Usage,
};
pub use message::{ChatHistory, ChatMessage, ContentBlock, MessageContent, MessageRole};
pub use providers::AzureChatClient;
