use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    query, AppState,
};

// ── GET /api/stats ────────────────────────────────────────────────────────────

pub async fn get_stats(State(state): State<AppState>) -> AppResult<Response> {
    let start = Instant::now();
    let snapshot = state
        .loader
        .load()
        .await
        .map_err(|_| AppError::StatsUnavailable)?;
    let envelope = query::stats(&snapshot);

    info!(
        total = envelope.total_products,
        platforms = envelope.platforms.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "Computed stats"
    );

    Ok((StatusCode::OK, Json(envelope)).into_response())
}
