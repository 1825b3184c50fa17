mod catalog;
mod config;
mod errors;
mod generation;
mod llm_client;
mod models;
mod render;
mod routes;
mod session;
mod speech;
mod state;
mod view;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::GeminiCourseGenerator;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::session::SessionController;
use crate::speech::{CommandSpeechEngine, ReadAloud};
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

    info!("Starting Polyglot API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_api_key.clone(), config.gemini_api_base.clone())
        .context("Failed to build HTTP client")?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let generator = Arc::new(GeminiCourseGenerator::new(llm));
    let session = Arc::new(SessionController::new(generator));

    // Read-aloud: disabled unless a host TTS program is configured
    let speech = match &config.speech_command {
        Some(program) => {
            info!("Read-aloud enabled via '{program}'");
            ReadAloud::with_engine(Arc::new(CommandSpeechEngine::new(program.clone())))
        }
        None => {
            info!("Read-aloud disabled (SPEECH_COMMAND not set)");
            ReadAloud::disabled()
        }
    };

    let state = AppState {
        session,
        speech: Arc::new(speech),
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
