use std::time::Duration;

use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tracing::debug;
use urlencoding::encode;

use crate::types::siri_response::{GetGeneralMessageResponse, GetStopMonitoringResponse};

use super::idfm_client_error::IdfmClientError;

/// Longest upstream error body echoed back to the caller.
pub const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Clone)]
pub struct IdfmClient {
    host: String,
    api_key: String,
    timeout: Duration,
}

impl IdfmClient {
    pub fn new(host: String, api_key: String, timeout: Duration) -> Self {
        IdfmClient {
            host: host.trim_end_matches('/').to_string(),
            api_key,
            timeout,
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub async fn fetch_stop_monitoring(
        &self,
        stop_id: &str,
    ) -> Result<GetStopMonitoringResponse, IdfmClientError> {
        let url = format!(
            "{}/stop-monitoring?MonitoringRef={}",
            self.host,
            encode(stop_id)
        );

        self.get_json(&url).await
    }

    pub async fn fetch_general_message(
        &self,
        line_id: Option<&str>,
    ) -> Result<GetGeneralMessageResponse, IdfmClientError> {
        let url = match line_id {
            Some(line_id) => format!("{}/general-message?LineRef={}", self.host, encode(line_id)),
            None => format!("{}/general-message", self.host),
        };

        self.get_json(&url).await
    }

    // A fresh client per call; it is dropped on every return path.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, IdfmClientError> {
        let client = reqwest::Client::builder().timeout(self.timeout).build()?;

        debug!("GET {}", url);
        let resp = client
            .get(url)
            .header("apikey", self.api_key.as_str())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(IdfmClientError::Status {
                code: status.as_u16(),
                body,
            });
        }

        Ok(resp.json::<T>().await?)
    }
}

/// First `MAX_ERROR_BODY_CHARS` characters of an upstream body.
pub fn body_excerpt(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}
