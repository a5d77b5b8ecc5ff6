pub mod stats;
pub mod trending;

#[cfg(test)]
pub(crate) mod test_util;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    models::HealthEnvelope,
    query,
    store::REFRESH_HINT,
    AppState,
};

/// API endpoints listed in not-found and no-data responses.
pub static API_ENDPOINTS: &[&str] = &[
    "/api/trending",
    "/api/trending/amazon",
    "/api/trending/producthunt",
    "/api/health",
    "/api/stats",
];

// ── GET / ─────────────────────────────────────────────────────────────────────

pub async fn index() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "name": "TrendTracker API",
            "version": env!("CARGO_PKG_VERSION"),
            "status": "running",
            "endpoints": {
                "GET /": "This documentation",
                "GET /api/trending": "Get all trending products",
                "GET /api/trending/amazon": "Get Amazon products only",
                "GET /api/trending/producthunt": "Get Product Hunt products only",
                "GET /api/health": "Health check",
                "GET /api/stats": "Get statistics",
            },
            "note": REFRESH_HINT,
        })),
    )
}

// ── GET /api/health ───────────────────────────────────────────────────────────

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthEnvelope>) {
    let snapshot = state.loader.load().await.ok();
    let envelope = query::health(snapshot.as_ref());

    debug!(data_available = envelope.data_available, "Health check");

    (StatusCode::OK, Json(envelope))
}

// ── Fallback ──────────────────────────────────────────────────────────────────

pub async fn not_found() -> AppResult<()> {
    Err(AppError::NotFound)
}
