//! Configuration resolution for the CLI
//!
//! Settings come from the environment (`AZURE_OPENAI_*`); command-line flags
//! take priority. A missing required variable is reported with the variable
//! name so the user knows what to set.

use anyhow::{Context, Result};
use frederick_core::config::{
    AzureOpenAiConfig, API_KEY_VAR, API_VERSION_VAR, DEPLOYMENT_VAR, ENDPOINT_VAR,
};

/// Flag overrides applied on top of the environment.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub deployment: Option<String>,
    pub api_key: Option<String>,
    pub api_version: Option<String>,
}

impl ConfigOverrides {
    /// Resolve the final configuration: flags first, then environment.
    pub fn resolve(&self) -> Result<AzureOpenAiConfig> {
        AzureOpenAiConfig::from_lookup(|var| {
            let flag = match var {
                ENDPOINT_VAR => self.endpoint.clone(),
                DEPLOYMENT_VAR => self.deployment.clone(),
                API_KEY_VAR => self.api_key.clone(),
                API_VERSION_VAR => self.api_version.clone(),
                _ => None,
            };
            flag.or_else(|| std::env::var(var).ok())
        })
        .context(
            "Missing or invalid Azure OpenAI configuration. Expected environment variables: \
             AZURE_OPENAI_ENDPOINT, AZURE_OPENAI_DEPLOYMENT, AZURE_OPENAI_API_KEY",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_win_over_environment() {
        let overrides = ConfigOverrides {
            endpoint: Some("https://flag.openai.azure.com".to_string()),
            deployment: Some("gpt-4o".to_string()),
            api_key: Some("flag-key".to_string()),
            api_version: None,
        };

        let config = overrides.resolve().expect("resolve with full overrides");
        assert_eq!(config.endpoint, "https://flag.openai.azure.com");
        assert_eq!(config.api_key, "flag-key");
    }
}
