use std::sync::Arc;

use serde_json::{json, Value};
use tokio::{
    io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt},
    sync::mpsc,
};
use tracing::{debug, info, warn};

use crate::app::App;

use super::{
    protocol::{
        CallToolParams, CallToolResult, McpRequest, McpResponse, INTERNAL_ERROR,
        INVALID_PARAMS, INVALID_REQUEST, JSONRPC_VERSION, METHOD_NOT_FOUND, PARSE_ERROR,
    },
    DEFAULT_PROTOCOL_VERSION, SERVER_NAME, SERVER_VERSION,
};

impl App {
    /// Serves requests until the reader is exhausted. Each request runs on its
    /// own task, so replies are written in completion order.
    pub async fn serve<R, W>(self: &Arc<Self>, reader: R, mut writer: W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<McpResponse>();
        let mut lines = reader.lines();

        loop {
            tokio::select! {
                line = lines.next_line() => match line? {
                    Some(line) => self.dispatch(&line, &tx),
                    None => break,
                },
                Some(response) = rx.recv() => write_response(&mut writer, &response).await?,
            }
        }

        info!("Input closed, waiting for in-flight requests");
        drop(tx);
        while let Some(response) = rx.recv().await {
            write_response(&mut writer, &response).await?;
        }

        Ok(())
    }

    fn dispatch(self: &Arc<Self>, line: &str, tx: &mpsc::UnboundedSender<McpResponse>) {
        if line.trim().is_empty() {
            return;
        }

        let value: Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => {
                let _ = tx.send(McpResponse::error(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {}", e),
                ));
                return;
            }
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        let request: McpRequest = match serde_json::from_value(value) {
            Ok(r) => r,
            Err(e) => {
                let _ = tx.send(McpResponse::error(
                    id,
                    INVALID_REQUEST,
                    format!("Invalid request: {}", e),
                ));
                return;
            }
        };

        let app = Arc::clone(self);
        let tx = tx.clone();
        tokio::spawn(async move {
            if let Some(response) = app.handle_request(request).await {
                if tx.send(response).is_err() {
                    debug!("Response dropped, writer is gone");
                }
            }
        });
    }

    /// Returns `None` for notifications, which get no reply.
    pub async fn handle_request(&self, request: McpRequest) -> Option<McpResponse> {
        if request.jsonrpc != JSONRPC_VERSION {
            return Some(McpResponse::error(
                request.id.unwrap_or(Value::Null),
                INVALID_REQUEST,
                format!("Unsupported jsonrpc version: {}", request.jsonrpc),
            ));
        }

        let id = match request.id {
            Some(id) => id,
            None => {
                debug!("Notification: {}", request.method);
                return None;
            }
        };

        let response = match request.method.as_str() {
            "initialize" => McpResponse::result(id, self.handle_initialize(&request.params)),
            "ping" => McpResponse::result(id, json!({})),
            "tools/list" => McpResponse::result(id, json!({ "tools": self.tool_definitions() })),
            "tools/call" => self.handle_tools_call(id, request.params).await,
            _ => McpResponse::error(
                id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ),
        };

        Some(response)
    }

    fn handle_initialize(&self, params: &Value) -> Value {
        let protocol_version = params
            .get("protocolVersion")
            .and_then(|v| v.as_str())
            .unwrap_or(DEFAULT_PROTOCOL_VERSION);

        json!({
            "protocolVersion": protocol_version,
            "serverInfo": {
                "name": SERVER_NAME,
                "version": SERVER_VERSION
            },
            "capabilities": {
                "tools": {}
            }
        })
    }

    async fn handle_tools_call(&self, id: Value, params: Value) -> McpResponse {
        let params: CallToolParams = match serde_json::from_value(params) {
            Ok(p) => p,
            Err(e) => {
                return McpResponse::error(id, INVALID_PARAMS, format!("Invalid params: {}", e))
            }
        };

        match self.call_tool(&params.name, params.arguments).await {
            Some(text) => match serde_json::to_value(CallToolResult::text(text)) {
                Ok(result) => McpResponse::result(id, result),
                Err(e) => McpResponse::error(id, INTERNAL_ERROR, e.to_string()),
            },
            None => {
                warn!("Unknown tool requested: {}", params.name);
                McpResponse::error(id, INVALID_PARAMS, format!("Unknown tool: {}", params.name))
            }
        }
    }
}

async fn write_response<W>(writer: &mut W, response: &McpResponse) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut payload = serde_json::to_string(response)?;
    payload.push('\n');
    writer.write_all(payload.as_bytes()).await?;
    writer.flush().await
}
