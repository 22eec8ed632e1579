mod config;
mod errors;
mod llm_client;
mod questionnaire;
mod recommendation;
mod routes;
mod sessions;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::questionnaire::catalog::default_questions;
use crate::questionnaire::models::Question;
use crate::routes::build_router;
use crate::sessions::{spawn_sweeper, SessionStore};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pathfinder API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the generative-service client
    let llm = GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_api_url.clone(),
        Duration::from_secs(config.gemini_timeout_secs),
    )?;
    info!(
        "LLM client initialized (model: {}, timeout: {}s)",
        llm_client::MODEL,
        config.gemini_timeout_secs
    );

    let questions: Arc<[Question]> = default_questions().into();
    info!("Question catalog loaded: {} questions", questions.len());

    let sessions = SessionStore::new();
    spawn_sweeper(
        sessions.clone(),
        Duration::from_secs(config.session_ttl_secs),
        Duration::from_secs(config.session_sweep_secs.max(1)),
    );
    info!(
        "Session sweeper started (ttl: {}s, every {}s)",
        config.session_ttl_secs, config.session_sweep_secs
    );

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        questions,
        sessions,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
