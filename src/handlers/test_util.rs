use std::io::Write;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tempfile::{NamedTempFile, TempDir};
use tower::ServiceExt;

use crate::{build_router, AppState};

/// Router backed by a file containing `raw`. Keep the file alive for the test.
pub fn with_raw(raw: &str) -> (NamedTempFile, Router) {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(raw.as_bytes()).unwrap();
    let app = build_router(AppState::new(file.path()));
    (file, app)
}

pub fn with_data(doc: Value) -> (NamedTempFile, Router) {
    with_raw(&doc.to_string())
}

/// Router pointing at a path that does not exist.
pub fn missing_data() -> (TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let app = build_router(AppState::new(dir.path().join("products.json")));
    (dir, app)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri).await
}

pub async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
