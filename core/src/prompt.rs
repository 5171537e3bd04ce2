//! Prompt functions
//!
//! A prompt function is a named prompt template invoked directly, without the
//! model deciding to call it. The template is rendered with handlebars and
//! sent as a one-shot completion.

use crate::error::Result;
use crate::llm::{ChatClient, ChatMessage};
use handlebars::Handlebars;
use serde_json::Value;

/// Template for the shipped sommelier function.
pub const WINE_PAIRING_TEMPLATE: &str = "\
Generate 3 potential dishes for pairing the given wine. The wine can be a distinct grape, \
a type of wine like red, white, or bubbly. Sometimes the given wine description might not \
be super accurate, so make sure you always suggest dishes regardless.
Wine: {{input}}
";

/// A named, described prompt template that can be invoked with arguments.
pub struct PromptFunction {
    name: String,
    description: String,
    registry: Handlebars<'static>,
}

impl PromptFunction {
    /// Create a prompt function from a template string.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        template: &str,
    ) -> Result<Self> {
        let name = name.into();
        let mut registry = Handlebars::new();
        // Prompts are plain text, not HTML
        registry.register_escape_fn(handlebars::no_escape);
        registry
            .register_template_string(&name, template)
            .map_err(|e| crate::error::Error::Generic(e.to_string()))?;

        Ok(Self {
            name,
            description: description.into(),
            registry,
        })
    }

    /// The sommelier wine-pairing function.
    pub fn sommelier() -> Result<Self> {
        Self::new(
            "sommelier",
            "Pair a type of wine with possible dishes.",
            WINE_PAIRING_TEMPLATE,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Render the template with the given arguments.
    pub fn render(&self, arguments: &Value) -> Result<String> {
        Ok(self.registry.render(&self.name, arguments)?)
    }

    /// Render the template and send it as a one-shot completion.
    pub async fn invoke(&self, client: &dyn ChatClient, arguments: &Value) -> Result<String> {
        let prompt = self.render(arguments)?;
        tracing::debug!(function = %self.name, "invoking prompt function");

        let response = client
            .chat_completion(vec![ChatMessage::user(prompt)], None, None)
            .await?;

        Ok(response.message.get_text().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sommelier_template_renders_wine_name() {
        let function = PromptFunction::sommelier().unwrap();
        let prompt = function
            .render(&json!({"input": "Gewürztraminer"}))
            .unwrap();

        assert!(prompt.contains("Wine: Gewürztraminer"));
        assert!(prompt.starts_with("Generate 3 potential dishes"));
    }

    #[test]
    fn missing_argument_renders_empty() {
        let function = PromptFunction::sommelier().unwrap();
        let prompt = function.render(&json!({})).unwrap();

        // handlebars renders absent variables as empty strings
        assert!(prompt.contains("Wine: \n"));
    }

    #[test]
    fn carries_name_and_description() {
        let function = PromptFunction::sommelier().unwrap();
        assert_eq!(function.name(), "sommelier");
        assert!(!function.description().is_empty());
    }
}
