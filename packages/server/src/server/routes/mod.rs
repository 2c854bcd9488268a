// HTTP routes
pub mod analyze;
pub mod criteria;
pub mod feedback;
pub mod health;
pub mod score;

pub use analyze::*;
pub use criteria::*;
pub use feedback::*;
pub use health::*;
pub use score::*;

use axum::body::Bytes;
use axum::http::StatusCode;
use serde::de::DeserializeOwned;

use crate::server::error::ApiError;

/// Parse a JSON request body; an empty body yields `T::default()`.
///
/// Content-Type is not enforced, matching what browsers send from plain
/// `fetch` calls.
pub fn parse_json_body<T>(body: &Bytes) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
}

/// `204 No Content` for CORS pre-flight requests.
pub async fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Fallback for unknown paths and unsupported methods.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
