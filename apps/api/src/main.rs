mod config;
mod errors;
mod extraction;
mod generation;
mod llm_client;
mod matching;
mod models;
mod report;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::jd_generator::JdGenerator;
use crate::llm_client::LlmClient;
use crate::matching::similarity::{
    EmbeddingScorer, SimilarityScorer, StaticModelEmbedder, UnavailableScorer,
};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Recruitment AI Agent v{}", env!("CARGO_PKG_VERSION"));

    tokio::fs::create_dir_all(&config.upload_dir).await?;
    info!("Upload directory: {}", config.upload_dir.display());

    let scorer = build_scorer(&config).await;

    // Initialize LLM client (optional: JD generation falls back to the template)
    let llm = match &config.openai_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone(), &config.openai_base_url)?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(client)
        }
        None => {
            info!("OPENAI_API_KEY not set, job descriptions will use the template");
            None
        }
    };

    let state = AppState {
        config: config.clone(),
        scorer,
        jd_generator: JdGenerator::new(llm),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Loads the embedding model once. A load failure is not fatal: the service
/// starts and every similarity score degrades to 0.
async fn build_scorer(config: &Config) -> Arc<dyn SimilarityScorer> {
    let model = config.embedding_model.clone();
    let loaded = tokio::task::spawn_blocking(move || StaticModelEmbedder::load(&model)).await;

    match loaded {
        Ok(Ok(embedder)) => Arc::new(EmbeddingScorer::new(Arc::new(embedder))),
        Ok(Err(e)) => {
            warn!("Similarity scoring disabled: {e}");
            Arc::new(UnavailableScorer::new(e.to_string()))
        }
        Err(e) => {
            warn!("Similarity scoring disabled: model loader crashed: {e}");
            Arc::new(UnavailableScorer::new(format!("model loader crashed: {e}")))
        }
    }
}
