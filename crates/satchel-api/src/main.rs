//! Satchel relay server
//!
//! Relays questions plus retrieval context from browser callers to the
//! OpenAI Responses API and returns the extracted answer.

use satchel_api::{create_router, state::AppState};
use satchel_core::AppConfig;
use satchel_llm::OpenAiClient;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::from_env()?;

    // Initialize tracing
    let level = config.logging.level.clone();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "satchel_api={level},tower_http={level}"
                ))
            }),
        )
        .init();

    // Build the completion client; fails fast when the credential is missing
    let client = Arc::new(OpenAiClient::from_config(&config.llm)?);
    tracing::info!(model = %config.llm.model, "Initialized completion client");

    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Create application state and router
    let state = Arc::new(AppState::new(config, client));
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Satchel relay listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
