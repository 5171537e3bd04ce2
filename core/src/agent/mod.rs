//! Chat agent and invocation loop

pub mod config;
pub mod core;

pub use config::AgentConfig;
pub use core::ChatAgent;
