use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::types::app_state::AppState;

mod get_line_info;
mod get_next_departures;
mod get_traffic_info;
mod search_routes;
mod search_stops;

#[derive(Serialize, Clone)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

#[async_trait]
pub trait Tool: Send + Sync {
    fn definition(&self) -> ToolDefinition;

    /// Always yields the text shown to the caller, including for failures.
    async fn call(&self, state: &AppState, arguments: Value) -> String;
}

#[derive(Default)]
pub struct ToolRouter {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool<T: Tool + 'static>(mut self, tool: T) -> Self {
        self.tools.push(Box::new(tool));
        self
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    pub async fn call(&self, state: &AppState, name: &str, arguments: Value) -> Option<String> {
        let tool = self.tools.iter().find(|t| t.definition().name == name)?;
        Some(tool.call(state, arguments).await)
    }
}

pub fn apply_tools(router: ToolRouter) -> ToolRouter {
    router
        .tool(get_next_departures::GetNextDepartures)
        .tool(search_stops::SearchStops)
        .tool(search_routes::SearchRoutes)
        .tool(get_traffic_info::GetTrafficInfo)
        .tool(get_line_info::GetLineInfo)
}

/// Input schema of string parameters, each with a string default.
fn string_params_schema(params: &[(&str, &str)]) -> Value {
    let properties: Map<String, Value> = params
        .iter()
        .map(|(name, default)| {
            (
                name.to_string(),
                json!({ "type": "string", "default": default }),
            )
        })
        .collect();

    json!({ "type": "object", "properties": properties })
}
