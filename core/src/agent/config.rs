//! Agent configuration structures

use serde::{Deserialize, Serialize};

/// Configuration for a chat agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Maximum number of completion round-trips per user message
    pub max_steps: usize,

    /// Names of tools available to this agent
    pub tools: Vec<String>,

    /// System prompt for the agent (optional)
    #[serde(default)]
    pub system_prompt: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_steps: 8,
            tools: vec!["travel_weather".to_string()],
            system_prompt: None,
        }
    }
}

impl AgentConfig {
    /// Set maximum steps
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Set tools
    pub fn with_tools(mut self, tools: Vec<String>) -> Self {
        self.tools = tools;
        self
    }

    /// Set system prompt
    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }
}
