mod app;
mod mcp;
mod tools;
mod types;
mod utils;

use std::{process::ExitCode, sync::Arc};

use tokio::io::BufReader;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::types::app_config::AppConfig;

#[tokio::main]
async fn main() -> ExitCode {
    // stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "idfm_mcp_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Île-de-France Mobilités MCP server...");

    let config = AppConfig::from_env();
    if config.api_key.is_empty() {
        warn!("IDFM_API_KEY not set - tools will not work without API key");
    } else {
        info!("API key configured");
    }

    let app = Arc::new(app::gen_app(config));

    match app
        .serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Server error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}
