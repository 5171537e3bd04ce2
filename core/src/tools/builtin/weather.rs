//! Travel weather skill

use crate::error::Result;
use crate::impl_tool_factory;
use crate::tools::{Tool, ToolCall, ToolResult};
use async_trait::async_trait;
use serde_json::json;

/// Skill that answers average-temperature questions for a city and month.
///
/// The lookup is canned: there is no upstream weather service behind it. The
/// point is to give the model a callable function whose result it folds into
/// its reply.
pub struct WeatherTool;

impl WeatherTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WeatherTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &str {
        "travel_weather"
    }

    fn description(&self) -> &str {
        "Takes a city and a month and returns the average temperature for that month."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "Name of the city"
                },
                "month": {
                    "type": "string",
                    "description": "Month of the year, e.g. June"
                }
            },
            "required": ["city", "month"]
        })
    }

    async fn execute(&self, call: ToolCall) -> Result<ToolResult> {
        let city: String = call.get_parameter("city")?;
        let month: String = call.get_parameter("month")?;

        let content = format!(
            "The average temperature in {} in {} is 75 degrees.",
            city, month
        );
        Ok(ToolResult::success(call.id, content))
    }
}

impl_tool_factory!(
    WeatherToolFactory,
    WeatherTool,
    "travel_weather",
    "Takes a city and a month and returns the average temperature for that month."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_canned_temperature_for_city_and_month() {
        let tool = WeatherTool::new();
        let call = ToolCall::new(
            "travel_weather",
            json!({"city": "San Francisco", "month": "June"}),
        );

        let result = tool.execute(call).await.unwrap();
        assert!(result.success);
        assert_eq!(
            result.content,
            "The average temperature in San Francisco in June is 75 degrees."
        );
    }

    #[tokio::test]
    async fn missing_month_is_an_invalid_parameter() {
        let tool = WeatherTool::new();
        let call = ToolCall::new("travel_weather", json!({"city": "Lisbon"}));

        assert!(tool.execute(call).await.is_err());
    }
}
