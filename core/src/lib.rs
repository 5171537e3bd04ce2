//! # frederick-core
//!
//! Core library for Frederick - a small tool-calling chat agent for Azure
//! OpenAI.
//!
//! This library wires a chat-completion client into a lightweight
//! orchestration layer: a tool registry of callable skills, an append-only
//! conversation history, an invocation loop that executes requested tools,
//! and a single-endpoint HTTP server.

// Core modules
pub mod agent;
pub mod config;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod server;
pub mod tools;

// Re-export commonly used types
pub use agent::{AgentConfig, ChatAgent};
pub use config::{AzureOpenAiConfig, ModelParams};
pub use error::{Error, Result};
pub use llm::{AzureChatClient, ChatClient, ChatHistory, ChatMessage};
pub use prompt::PromptFunction;

/// Current version of the frederick-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
