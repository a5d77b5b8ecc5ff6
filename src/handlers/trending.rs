use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::platform,
    query, AppState,
};

// ── GET /api/trending ─────────────────────────────────────────────────────────

pub async fn list_trending(State(state): State<AppState>) -> AppResult<Response> {
    let start = Instant::now();
    let snapshot = state.loader.load().await?;
    let envelope = query::all(&snapshot);

    info!(
        count = envelope.count,
        elapsed_ms = start.elapsed().as_millis(),
        "Listed trending products"
    );

    Ok((StatusCode::OK, Json(envelope)).into_response())
}

// ── GET /api/trending/:platform ───────────────────────────────────────────────

pub async fn list_by_platform(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Response> {
    // Unknown slugs are a routing miss, whatever the state of the data file.
    let label = platform::label_for(&slug).ok_or(AppError::NotFound)?;

    let start = Instant::now();
    let snapshot = state.loader.load().await?;
    let envelope = query::by_platform(&snapshot, label);

    info!(
        platform = label,
        count = envelope.count,
        elapsed_ms = start.elapsed().as_millis(),
        "Listed trending products by platform"
    );

    Ok((StatusCode::OK, Json(envelope)).into_response())
}
