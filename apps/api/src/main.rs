mod config;
mod errors;
mod matching;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::matching::weights::Factor;
use crate::matching::{MatchEngine, MatchScorer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
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

    info!("Starting JobMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize match scorer from the configured weight profile
    let weights = config.weight_profile.weights();
    let scorer: Arc<dyn MatchScorer> = Arc::new(MatchEngine::new(weights));
    info!(
        "Match scorer initialized (backend: {}, profile: {}, active factors: {}, cap sum: {})",
        scorer.backend(),
        config.weight_profile,
        weights.active_factors(),
        weights.sum()
    );
    for factor in Factor::ALL {
        debug!(factor = factor.name(), cap = weights.cap(factor), "factor cap");
    }
    info!(
        "Rank limits: {} jobs per request, {} ms deadline",
        config.max_jobs_per_request,
        config.rank_timeout.as_millis()
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        scorer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS origins once the API gateway is in place

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
