//! JSON error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors surfaced to HTTP callers as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid client input
    #[error("{0}")]
    BadRequest(String),

    #[error("Not found")]
    NotFound,

    /// Missing credential or other server configuration
    #[error("{0}")]
    Config(String),

    /// Failure reported by the LLM or email provider
    #[error("{0}")]
    Upstream(String),

    /// Malformed request body or anything unexpected
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Config(_) | ApiError::Upstream(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(error = %self, status = %status, "Request failed");
        }

        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}
