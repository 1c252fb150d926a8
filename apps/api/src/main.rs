mod analysis;
mod config;
mod errors;
mod extraction;
mod llm_client;
mod matching;
mod recognition;
mod routes;
mod state;
mod uploads;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::DocumentTextExtractor;
use crate::llm_client::LlmClient;
use crate::matching::vocabulary::SkillVocabulary;
use crate::recognition::{DisabledRecognizer, EntityRecognizer, LlmEntityRecognizer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting matcher v{}", env!("CARGO_PKG_VERSION"));

    let vocabulary = Arc::new(SkillVocabulary::builtin());
    info!("Skill vocabulary loaded ({} terms)", vocabulary.len());

    let recognizer: Arc<dyn EntityRecognizer> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone(), config.llm_model.clone())?;
            info!("Entity recognition via LLM (model: {})", llm.model());
            Arc::new(LlmEntityRecognizer(llm))
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; entity recognition disabled, curated skills only");
            Arc::new(DisabledRecognizer)
        }
    };

    if let Some(dir) = &config.upload_dir {
        info!("Archiving uploads to {}", dir.display());
    }

    let state = AppState {
        config: config.clone(),
        vocabulary,
        recognizer,
        extractor: Arc::new(DocumentTextExtractor),
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
