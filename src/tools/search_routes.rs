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

pub const SEARCH_ROUTES_UNAVAILABLE: &str = concat!(
    "❌ Error: The search_routes functionality is not available in the current IDFM PRIM API. \n",
    "The API only supports SIRI endpoints for real-time monitoring data, not NavItia-style journey planning. \n",
    "For route planning, you'll need to use other services like Citymapper, Google Maps, or the official IDFM mobile app."
);

#[derive(Validate, Deserialize)]
pub struct SearchRoutesPayload {
    #[serde(default, deserialize_with = "string_arg")]
    pub from_place: String,

    #[serde(default, deserialize_with = "string_arg")]
    pub to_place: String,

    #[serde(default, deserialize_with = "string_arg")]
    pub datetime_param: String,
}

pub struct SearchRoutes;

#[async_trait]
impl Tool for SearchRoutes {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "search_routes",
            description: "Calculate journey itineraries between two places in Paris transport network. NOTE: This endpoint is not available in the current IDFM PRIM API.",
            input_schema: string_params_schema(&[
                ("from_place", ""),
                ("to_place", ""),
                ("datetime_param", ""),
            ]),
        }
    }

    async fn call(&self, _state: &AppState, arguments: Value) -> String {
        if let Ok(ValidatedArgs(payload)) =
            ValidatedArgs::<SearchRoutesPayload>::from_arguments(arguments)
        {
            info!(
                "Searching routes from {} to {} at {}",
                payload.from_place, payload.to_place, payload.datetime_param
            );
        }

        SEARCH_ROUTES_UNAVAILABLE.to_string()
    }
}
