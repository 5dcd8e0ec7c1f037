mod cache;
mod config;
mod embedding;
mod errors;
mod extract;
mod jobs;
mod matcher;
mod parser;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cache::ResultCache;
use crate::config::Config;
use crate::embedding::HashedBagEmbedder;
use crate::jobs::JobSourceClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume-match API v{}", env!("CARGO_PKG_VERSION"));

    // Result cache: degrades to disabled when Redis is not configured or
    // unreachable; requests never fail because of it.
    let cache = ResultCache::connect(config.redis_url.as_deref());
    info!(enabled = cache.is_enabled(), "Result cache initialized");

    let jobs = JobSourceClient::new(config.jobs_url.clone());
    info!("Job source client initialized ({})", config.jobs_url);

    // Embedding backend behind the Embedder seam; swap here to change models.
    let embedder = Arc::new(HashedBagEmbedder);
    info!("Embedder initialized");

    let state = AppState {
        cache,
        jobs,
        embedder,
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
