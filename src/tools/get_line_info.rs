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

pub const LINE_INFO_UNAVAILABLE: &str = concat!(
    "❌ Error: The get_line_info functionality is not available in the current IDFM PRIM API. \n",
    "The API only supports SIRI endpoints for real-time data, not NavItia-style line information. \n",
    "For line information, please use the official IDFM website or mobile app."
);

#[derive(Validate, Deserialize)]
pub struct GetLineInfoPayload {
    #[serde(default, deserialize_with = "string_arg")]
    pub line_id: String,
}

pub struct GetLineInfo;

#[async_trait]
impl Tool for GetLineInfo {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "get_line_info",
            description: "Get detailed information about a specific transport line in Paris region. NOTE: This endpoint is not available in the current IDFM PRIM API.",
            input_schema: string_params_schema(&[("line_id", "")]),
        }
    }

    async fn call(&self, _state: &AppState, arguments: Value) -> String {
        if let Ok(ValidatedArgs(payload)) =
            ValidatedArgs::<GetLineInfoPayload>::from_arguments(arguments)
        {
            info!("Getting line info for: {}", payload.line_id);
        }

        LINE_INFO_UNAVAILABLE.to_string()
    }
}
