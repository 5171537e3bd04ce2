//! Azure OpenAI connection configuration
//!
//! Core only accepts fully resolved configuration. Resolution reads the
//! process environment through a lookup closure so it can be tested without
//! mutating global state; the CLI layer applies flag overrides on top.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Environment variable holding the Azure OpenAI endpoint URL.
pub const ENDPOINT_VAR: &str = "AZURE_OPENAI_ENDPOINT";
/// Environment variable holding the deployment (model) name.
pub const DEPLOYMENT_VAR: &str = "AZURE_OPENAI_DEPLOYMENT";
/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "AZURE_OPENAI_API_KEY";
/// Environment variable holding the API version (optional).
pub const API_VERSION_VAR: &str = "AZURE_OPENAI_API_VERSION";

/// API version used when `AZURE_OPENAI_API_VERSION` is not set.
pub const DEFAULT_API_VERSION: &str = "2024-12-01-preview";

/// Model parameters for chat completion requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelParams {
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Temperature for sampling
    pub temperature: Option<f32>,
    /// Top-p sampling parameter
    pub top_p: Option<f32>,
}

impl Default for ModelParams {
    fn default() -> Self {
        // Defaults taken from the execution settings the chat scripts use.
        Self {
            max_tokens: Some(5000),
            temperature: Some(1.0),
            top_p: None,
        }
    }
}

/// A fully resolved Azure OpenAI configuration ready for use by core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AzureOpenAiConfig {
    /// Endpoint URL, e.g. `https://my-resource.openai.azure.com`
    pub endpoint: String,
    /// Deployment name of the chat model
    pub deployment: String,
    /// API key for authentication
    pub api_key: String,
    /// API version query parameter
    pub api_version: String,
    /// Model parameters
    #[serde(default)]
    pub params: ModelParams,
}

impl AzureOpenAiConfig {
    pub fn new(
        endpoint: impl Into<String>,
        deployment: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            deployment: deployment.into(),
            api_key: api_key.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            params: ModelParams::default(),
        }
    }

    /// Set the API version
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set model parameters
    pub fn with_params(mut self, params: ModelParams) -> Self {
        self.params = params;
        self
    }

    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Resolve configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| -> Result<String> {
            lookup(var)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| {
                    ConfigError::MissingVariable {
                        var: var.to_string(),
                    }
                    .into()
                })
        };

        let endpoint = required(ENDPOINT_VAR)?;
        let deployment = required(DEPLOYMENT_VAR)?;
        let api_key = required(API_KEY_VAR)?;
        let api_version =
            lookup(API_VERSION_VAR).unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        let config = Self::new(endpoint, deployment, api_key).with_api_version(api_version);
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                field: "endpoint".to_string(),
                value: self.endpoint.clone(),
            }
            .into());
        }

        if let Some(temp) = self.params.temperature {
            if !(0.0..=2.0).contains(&temp) {
                return Err(ConfigError::InvalidValue {
                    field: "temperature".to_string(),
                    value: temp.to_string(),
                }
                .into());
            }
        }

        if let Some(top_p) = self.params.top_p {
            if !(0.0..=1.0).contains(&top_p) {
                return Err(ConfigError::InvalidValue {
                    field: "top_p".to_string(),
                    value: top_p.to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}
