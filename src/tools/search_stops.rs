use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;
use validator::Validate;

use crate::{
    types::app_state::AppState,
    utils::tool_args::{string_arg, ValidatedArgs},
};

use super::{string_params_schema, Tool, ToolDefinition};

pub const SEARCH_STOPS_UNAVAILABLE: &str = concat!(
    "❌ Error: The search_stops functionality is not available in the current IDFM PRIM API. \n",
    "The API only supports SIRI endpoints for real-time data, not NavItia-style place searches. \n",
    "You'll need to use known stop IDs or find them through other means."
);

#[derive(Validate, Deserialize)]
pub struct SearchStopsPayload {
    #[serde(default, deserialize_with = "string_arg")]
    pub query: String,

    #[serde(default, deserialize_with = "string_arg")]
    pub limit: String,
}

pub struct SearchStops;

#[async_trait]
impl Tool for SearchStops {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "search_stops",
            description: "Search for transport stops by name or location in Paris region. NOTE: This endpoint is currently not available in the IDFM PRIM API.",
            input_schema: string_params_schema(&[("query", ""), ("limit", "10")]),
        }
    }

    async fn call(&self, _state: &AppState, arguments: Value) -> String {
        if let Ok(ValidatedArgs(payload)) =
            ValidatedArgs::<SearchStopsPayload>::from_arguments(arguments)
        {
            info!("Searching stops with query: {} (limit {})", payload.query, payload.limit);
        }

        SEARCH_STOPS_UNAVAILABLE.to_string()
    }
}
