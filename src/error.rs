use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{handlers::API_ENDPOINTS, store::Absent, store::REFRESH_HINT};

pub type AppResult<T> = Result<T, AppError>;

/// Every failure a caller can see. All map to 404 with `success: false`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Listing or filtering without a usable data file.
    #[error("No data available")]
    DataUnavailable,

    /// Stats without a usable data file; reported without endpoint hints.
    #[error("No data available")]
    StatsUnavailable,

    #[error("Endpoint not found")]
    NotFound,
}

impl From<Absent> for AppError {
    fn from(_: Absent) -> Self {
        AppError::DataUnavailable
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match self {
            AppError::DataUnavailable => json!({
                "success": false,
                "error": self.to_string(),
                "message": REFRESH_HINT,
                "availableEndpoints": API_ENDPOINTS,
            }),
            AppError::StatsUnavailable => json!({
                "success": false,
                "error": format!("{}. {}", self, REFRESH_HINT),
            }),
            AppError::NotFound => json!({
                "success": false,
                "error": self.to_string(),
                "availableEndpoints": API_ENDPOINTS,
            }),
        };

        (StatusCode::NOT_FOUND, Json(body)).into_response()
    }
}
