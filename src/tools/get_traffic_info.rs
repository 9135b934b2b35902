use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info};
use validator::Validate;

use crate::{
    types::{app_state::AppState, siri_response::GetGeneralMessageResponse},
    utils::{
        idfm_client_error::IdfmClientError,
        tool_args::{raw_string_arg, ValidatedArgs},
    },
};

use super::{string_params_schema, Tool, ToolDefinition};

#[derive(Validate, Deserialize)]
pub struct GetTrafficInfoPayload {
    /// Trimmed for the upstream filter, echoed back as given.
    #[serde(default, deserialize_with = "raw_string_arg")]
    pub line_id: String,
}

pub struct GetTrafficInfo;

#[async_trait]
impl Tool for GetTrafficInfo {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "get_traffic_info",
            description:
                "Get real-time traffic disruptions and messages for Paris transport lines.",
            input_schema: string_params_schema(&[("line_id", "")]),
        }
    }

    async fn call(&self, state: &AppState, arguments: Value) -> String {
        match ValidatedArgs::<GetTrafficInfoPayload>::from_arguments(arguments) {
            Ok(ValidatedArgs(payload)) => get_traffic_info(state, payload).await,
            Err(e) => format!("❌ Error: {}", e),
        }
    }
}

pub async fn get_traffic_info(state: &AppState, payload: GetTrafficInfoPayload) -> String {
    info!("Getting traffic info for line: {}", payload.line_id);

    if !state.idfm_client.has_api_key() {
        return "❌ Error: IDFM_API_KEY not configured.".to_string();
    }

    let line_filter = Some(payload.line_id.trim()).filter(|l| !l.is_empty());

    match state.idfm_client.fetch_general_message(line_filter).await {
        Ok(body) => render_traffic_info(
            line_filter.map(|_| payload.line_id.as_str()),
            &body,
        ),
        Err(IdfmClientError::Status { code, .. }) => {
            error!("HTTP error: {}", code);
            format!("❌ API Error: {}", code)
        }
        Err(e) => {
            error!("Error: {}", e);
            format!("❌ Error: {}", e)
        }
    }
}

pub fn render_traffic_info(line_id: Option<&str>, body: &GetGeneralMessageResponse) -> String {
    let delivery = match body.Siri.ServiceDelivery.GeneralMessageDelivery.first() {
        Some(d) => d,
        None => return "ℹ️ No traffic messages available.".to_string(),
    };

    if delivery.InfoMessage.is_empty() {
        return match line_id {
            Some(line_id) => format!("✅ No disruptions for line: {}", line_id),
            None => "✅ No current disruptions on the network.".to_string(),
        };
    }

    let mut result = String::from("🚦 Traffic Information\n\n");

    for (i, message) in delivery.InfoMessage.iter().enumerate() {
        let text = message
            .Content
            .Message
            .first()
            .and_then(|m| m.MessageText.value.as_deref())
            .unwrap_or("No details");
        let line_ref = message
            .InfoMessageIdentifier
            .InfoChannelRef
            .value
            .as_deref()
            .unwrap_or("Network");

        result.push_str(&format!("{}. Line/Network: {}\n", i + 1, line_ref));
        result.push_str(&format!("   ℹ️ {}\n\n", text));
    }

    result
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tracing_test::traced_test;

    use crate::{
        app::{gen_app, test_config},
        types::siri_response::{
            GeneralMessageDelivery, GeneralMessageServiceDelivery, GeneralMessageSiri,
            InfoMessage, InfoMessageContent, InfoMessageIdentifier, InfoMessageText, SiriValue,
        },
    };

    use super::*;

    fn message(channel: &str, text: &str) -> InfoMessage {
        InfoMessage {
            InfoMessageIdentifier: InfoMessageIdentifier {
                InfoChannelRef: SiriValue::new(channel),
            },
            Content: InfoMessageContent {
                Message: vec![InfoMessageText {
                    MessageText: SiriValue::new(text),
                }],
            },
        }
    }

    fn response(deliveries: Vec<Vec<InfoMessage>>) -> GetGeneralMessageResponse {
        GetGeneralMessageResponse {
            Siri: GeneralMessageSiri {
                ServiceDelivery: GeneralMessageServiceDelivery {
                    GeneralMessageDelivery: deliveries
                        .into_iter()
                        .map(|messages| GeneralMessageDelivery {
                            InfoMessage: messages,
                        })
                        .collect(),
                },
            },
        }
    }

    #[test]
    fn no_delivery_is_informational() {
        assert_eq!(
            render_traffic_info(None, &response(vec![])),
            "ℹ️ No traffic messages available."
        );
    }

    #[test]
    fn empty_messages_depend_on_filter() {
        let body = response(vec![vec![]]);

        assert_eq!(
            render_traffic_info(Some("C01742"), &body),
            "✅ No disruptions for line: C01742"
        );
        assert_eq!(
            render_traffic_info(None, &body),
            "✅ No current disruptions on the network."
        );
    }

    #[test]
    fn renders_messages_with_placeholders() {
        let body = response(vec![vec![
            message("Perturbation", "Trafic interrompu entre Nation et Vincennes."),
            InfoMessage::default(),
        ]]);

        assert_eq!(
            render_traffic_info(None, &body),
            "🚦 Traffic Information\n\n\
             1. Line/Network: Perturbation\n   ℹ️ Trafic interrompu entre Nation et Vincennes.\n\n\
             2. Line/Network: Network\n   ℹ️ No details\n\n"
        );
    }

    #[tokio::test]
    async fn get_response_for_line() {
        let mut mock_server = mockito::Server::new_async().await;

        let app = gen_app(test_config(&mock_server.url(), "key"));

        let mock_response = response(vec![vec![message("Travaux", "Gare fermée ce week-end.")]]);

        let mock_server = mock_server
            .mock("GET", "/general-message")
            .match_header("apikey", "key")
            .match_query(mockito::Matcher::UrlEncoded(
                "LineRef".to_string(),
                "STIF:Line::C01742:".to_string(),
            ))
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::to_string(&mock_response).expect("Failed to serialize test response"),
            )
            .create_async()
            .await;

        let result = app
            .call_tool("get_traffic_info", json!({ "line_id": " STIF:Line::C01742: " }))
            .await
            .expect("Tool not registered");

        mock_server.assert_async().await;

        assert!(result.starts_with("🚦 Traffic Information"));
        assert!(result.contains("1. Line/Network: Travaux"));
        assert!(result.contains("Gare fermée ce week-end."));
    }

    #[tokio::test]
    async fn filtered_quiet_line_echoes_line_as_given() {
        let mut mock_server = mockito::Server::new_async().await;

        let app = gen_app(test_config(&mock_server.url(), "key"));

        let mock_server = mock_server
            .mock("GET", "/general-message")
            .match_query(mockito::Matcher::UrlEncoded(
                "LineRef".to_string(),
                "C01742".to_string(),
            ))
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&response(vec![vec![]])).unwrap())
            .create_async()
            .await;

        let result = app
            .call_tool("get_traffic_info", json!({ "line_id": "C01742 " }))
            .await
            .expect("Tool not registered");

        mock_server.assert_async().await;
        assert_eq!(result, "✅ No disruptions for line: C01742 ");
    }

    #[tokio::test]
    async fn unfiltered_request_reports_quiet_network() {
        let mut mock_server = mockito::Server::new_async().await;

        let app = gen_app(test_config(&mock_server.url(), "key"));

        let mock_server = mock_server
            .mock("GET", "/general-message")
            .match_query(mockito::Matcher::Any)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&response(vec![vec![]])).unwrap())
            .expect(2)
            .create_async()
            .await;

        for arguments in [json!({}), json!({ "line_id": "   " })] {
            let result = app
                .call_tool("get_traffic_info", arguments)
                .await
                .expect("Tool not registered");
            assert_eq!(result, "✅ No current disruptions on the network.");
        }

        mock_server.assert_async().await;
    }

    #[tokio::test]
    async fn missing_api_key_makes_no_request() {
        let mut mock_server = mockito::Server::new_async().await;

        let app = gen_app(test_config(&mock_server.url(), ""));

        let mock_server = mock_server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let result = app
            .call_tool("get_traffic_info", json!({ "line_id": "C01742" }))
            .await
            .expect("Tool not registered");

        mock_server.assert_async().await;
        assert_eq!(result, "❌ Error: IDFM_API_KEY not configured.");
    }

    #[tokio::test]
    #[traced_test]
    async fn upstream_error_is_reported() {
        let mut mock_server = mockito::Server::new_async().await;

        let app = gen_app(test_config(&mock_server.url(), "key"));

        let _m = mock_server
            .mock("GET", "/general-message")
            .match_query(mockito::Matcher::Any)
            .with_status(503)
            .with_body("Service Unavailable")
            .create_async()
            .await;

        let result = app
            .call_tool("get_traffic_info", json!({}))
            .await
            .expect("Tool not registered");

        assert_eq!(result, "❌ API Error: 503");
        assert!(logs_contain("HTTP error: 503"));
    }

    #[tokio::test]
    async fn connection_failure_is_reported() {
        let app = gen_app(test_config("http://127.0.0.1:1", "key"));

        let result = app
            .call_tool("get_traffic_info", json!({}))
            .await
            .expect("Tool not registered");

        assert!(result.starts_with("❌ Error: "));
    }
}
