use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info};
use validator::Validate;

use crate::{
    types::{app_state::AppState, siri_response::GetStopMonitoringResponse},
    utils::{
        idfm_client::body_excerpt,
        idfm_client_error::IdfmClientError,
        time_format::format_datetime,
        tool_args::{
            raw_string_arg, string_arg, validate_not_blank, ToolArgsError, ValidatedArgs,
        },
    },
};

use super::{string_params_schema, Tool, ToolDefinition};

pub const DEFAULT_MAX_RESULTS: usize = 10;
const MAX_RESULTS_LIMIT: i64 = 50;

#[derive(Validate, Deserialize)]
pub struct GetNextDeparturesPayload {
    /// Sent upstream and echoed back as given.
    #[serde(default, deserialize_with = "raw_string_arg")]
    #[validate(custom(function = "validate_not_blank"))]
    pub stop_id: String,

    #[serde(default = "default_max_results", deserialize_with = "string_arg")]
    pub max_results: String,
}

fn default_max_results() -> String {
    DEFAULT_MAX_RESULTS.to_string()
}

/// Anything that is not an integer in `1..=50` falls back to the default.
pub fn parse_max_results(raw: &str) -> usize {
    match raw.trim().parse::<i64>() {
        Ok(n) if (1..=MAX_RESULTS_LIMIT).contains(&n) => n as usize,
        _ => DEFAULT_MAX_RESULTS,
    }
}

pub struct GetNextDepartures;

#[async_trait]
impl Tool for GetNextDepartures {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "get_next_departures",
            description:
                "Get real-time next departures for a specific stop in Paris transport network.",
            input_schema: string_params_schema(&[("stop_id", ""), ("max_results", "10")]),
        }
    }

    async fn call(&self, state: &AppState, arguments: Value) -> String {
        match ValidatedArgs::<GetNextDeparturesPayload>::from_arguments(arguments) {
            Ok(ValidatedArgs(payload)) => get_next_departures(state, payload).await,
            Err(ToolArgsError::Validation(_)) => {
                info!("Getting next departures without a stop id");
                "❌ Error: stop_id is required. Use search_stops to find stop IDs.".to_string()
            }
            Err(e) => format!("❌ Error: {}", e),
        }
    }
}

pub async fn get_next_departures(state: &AppState, payload: GetNextDeparturesPayload) -> String {
    info!("Getting next departures for stop {}", payload.stop_id);

    if !state.idfm_client.has_api_key() {
        return "❌ Error: IDFM_API_KEY not configured. Set your API token in Docker secrets."
            .to_string();
    }

    let max_results = parse_max_results(&payload.max_results);

    match state
        .idfm_client
        .fetch_stop_monitoring(&payload.stop_id)
        .await
    {
        Ok(body) => render_departures(&payload.stop_id, &body, max_results),
        Err(IdfmClientError::Status { code, body }) => {
            error!("HTTP error: {}", code);
            format!("❌ API Error: {} - {}", code, body_excerpt(&body))
        }
        Err(IdfmClientError::Timeout) => "⏱️ Request timed out. Please try again.".to_string(),
        Err(e) => {
            error!("Error: {}", e);
            format!("❌ Error: {}", e)
        }
    }
}

pub fn render_departures(
    stop_id: &str,
    body: &GetStopMonitoringResponse,
    max_results: usize,
) -> String {
    let delivery = match body.Siri.ServiceDelivery.StopMonitoringDelivery.first() {
        Some(d) => d,
        None => return format!("❌ No departure data found for stop: {}", stop_id),
    };

    if delivery.MonitoredStopVisit.is_empty() {
        return format!("ℹ️ No upcoming departures found for stop: {}", stop_id);
    }

    let mut result = format!("🚇 Next Departures for Stop {}\n\n", stop_id);

    for (i, visit) in delivery
        .MonitoredStopVisit
        .iter()
        .take(max_results)
        .enumerate()
    {
        let journey = &visit.MonitoredVehicleJourney;
        let line_ref = journey.LineRef.value.as_deref().unwrap_or("Unknown");
        let destination = journey
            .DestinationName
            .first()
            .and_then(|d| d.value.as_deref())
            .unwrap_or("Unknown");

        let call = &journey.MonitoredCall;
        let departure = match call.ExpectedDepartureTime.as_deref() {
            Some(expected) if !expected.is_empty() => expected,
            _ => call.AimedDepartureTime.as_deref().unwrap_or(""),
        };

        result.push_str(&format!("{}. Line {} → {}\n", i + 1, line_ref, destination));
        result.push_str(&format!("   ⏰ Departure: {}\n\n", format_datetime(departure)));
    }

    result
}
