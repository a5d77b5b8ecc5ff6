use std::{path::PathBuf, sync::Arc};

use axum::{
    routing::{get, MethodRouter},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

mod config;
mod error;
mod handlers;
mod models;
mod query;
mod store;

use crate::config::Config;
use crate::store::{DatasetLoader, REFRESH_HINT};

/// Shared application state. Holds only where to read from; every request
/// loads its own snapshot, so nothing here is mutable.
#[derive(Clone)]
pub struct AppState {
    pub loader: Arc<DatasetLoader>,
}

impl AppState {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            loader: Arc::new(DatasetLoader::new(data_file)),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,trendtracker_api=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);

    info!("{}", "=".repeat(60));
    info!("TrendTracker API v{}", env!("CARGO_PKG_VERSION"));
    info!("{}", "=".repeat(60));
    info!("Server running: http://{}", addr);
    info!("API docs:       http://{}/", addr);
    info!("Trending:       http://{}/api/trending", addr);
    info!("{}", "=".repeat(60));

    let state = AppState::new(config.data_file);
    let data_file = state.loader.path();
    if tokio::fs::try_exists(data_file).await.unwrap_or(false) {
        info!(path = %data_file.display(), "Data file found");
    } else {
        warn!(path = %data_file.display(), "Data file not found. {}", REFRESH_HINT);
    }

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    // Wrong-method requests get the same JSON not-found body as unknown paths.
    let json_fallback = |method_router: MethodRouter<AppState>| method_router.fallback(handlers::not_found);

    Router::new()
        // ── Index & health ──────────────────────────────────────────────────
        .route("/", json_fallback(get(handlers::index)))
        .route("/api/health", json_fallback(get(handlers::health)))

        // ── Trending listings ───────────────────────────────────────────────
        .route("/api/trending", json_fallback(get(handlers::trending::list_trending)))
        .route(
            "/api/trending/:platform",
            json_fallback(get(handlers::trending::list_by_platform)),
        )

        // ── Stats ───────────────────────────────────────────────────────────
        .route("/api/stats", json_fallback(get(handlers::stats::get_stats)))

        .fallback(handlers::not_found)

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
