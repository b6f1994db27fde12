mod analysis;
mod avatar;
mod config;
mod errors;
mod llm_client;
mod routes;
mod skills;
mod state;
mod web;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::loader::PdfLoader;
use crate::config::{Config, ProviderConfig};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Advisor API v{}", env!("CARGO_PKG_VERSION"));

    let analysis_llm = build_client("analysis", config.analysis.as_ref())?;
    let skills_llm = build_client("skills", config.skills.as_ref())?;

    let state = AppState {
        config: config.clone(),
        analysis_llm,
        skills_llm,
        loader: Arc::new(PdfLoader),
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

/// Builds the client for one feature, or logs that the feature is disabled.
fn build_client(feature: &str, provider: Option<&ProviderConfig>) -> Result<Option<LlmClient>> {
    let Some(provider) = provider else {
        warn!("{feature} disabled: no API key configured");
        return Ok(None);
    };
    let client = LlmClient::new(provider)
        .with_context(|| format!("Failed to build HTTP client for {feature}"))?;
    info!(
        "{feature} LLM client initialized (model: {}, endpoint: {})",
        client.model(),
        provider.api_url
    );
    Ok(Some(client))
}
