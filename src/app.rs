use serde_json::Value;

use crate::{
    tools::{apply_tools, ToolDefinition, ToolRouter},
    types::{app_config::AppConfig, app_state::AppState},
    utils::idfm_client::IdfmClient,
};

pub struct App {
    pub state: AppState,
    tools: ToolRouter,
}

pub fn gen_app(config: AppConfig) -> App {
    let state = AppState {
        idfm_client: IdfmClient::new(config.idfm_host, config.api_key, config.timeout),
    };

    App {
        state,
        tools: apply_tools(ToolRouter::new()),
    }
}

impl App {
    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.tools.definitions()
    }

    /// `None` when no tool is registered under `name`.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Option<String> {
        self.tools.call(&self.state, name, arguments).await
    }
}

#[cfg(test)]
pub fn test_config(idfm_host: &str, api_key: &str) -> AppConfig {
    AppConfig {
        idfm_host: idfm_host.to_string(),
        api_key: api_key.to_string(),
        timeout: std::time::Duration::from_secs(5),
    }
}
