mod config;
mod errors;
mod generation;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::backend::OpenRouterBackend;
use crate::generation::fallback::{FallbackInvoker, DEFAULT_MODELS};
use crate::generation::service::{AssignmentContentService, SyllabusContentService};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("lectern_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Lectern API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the OpenRouter backend and the fallback invoker.
    // The model list is fixed at startup and shared read-only.
    let provider = Arc::new(OpenRouterBackend::new(config.openrouter_api_key.clone()));
    let invoker = Arc::new(FallbackInvoker::with_default_models(provider.clone()));
    info!(
        "Generation backend initialized (models: {})",
        DEFAULT_MODELS.join(", ")
    );

    let state = AppState {
        syllabi: Arc::new(SyllabusContentService::new(invoker.clone())),
        assignments: Arc::new(AssignmentContentService::new(invoker)),
        provider,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
