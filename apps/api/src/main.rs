mod config;
mod errors;
mod flows;
mod gateway;
mod guidance;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::gateway::Gateway;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerCompass API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the oracle client
    let llm = LlmClient::new(
        config.anthropic_api_key.clone(),
        config.oracle_api_url.clone(),
        Duration::from_secs(config.oracle_timeout_secs),
        config.oracle_max_retries,
    )?;
    info!(
        "Oracle client initialized (model: {}, timeout: {}s, retries: {})",
        llm_client::MODEL,
        config.oracle_timeout_secs,
        config.oracle_max_retries
    );

    let state = AppState {
        gateway: Gateway::new(Arc::new(llm)),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
