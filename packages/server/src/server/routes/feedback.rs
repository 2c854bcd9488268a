use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::RESEND_API_KEY;
use crate::domains::feedback::compose_feedback_email;
use crate::server::app::AppState;
use crate::server::error::ApiError;

use super::parse_json_body;

#[derive(Debug, Default, Deserialize)]
pub struct FeedbackRequest {
    pub text: Option<Value>,
}

impl FeedbackRequest {
    /// Feedback as text. Scalars are stringified; `null`, `false` and `0`
    /// count as absent.
    pub fn text(&self) -> Option<String> {
        match self.text.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(text) => Some(text.clone()),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(other.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Relay visitor feedback to the fixed recipient by email.
pub async fn feedback_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let request: FeedbackRequest =
        parse_json_body(&body).map_err(|e| ApiError::Internal(e.to_string()))?;

    let mailer = state
        .deps
        .mailer
        .as_ref()
        .ok_or_else(|| ApiError::Config(format!("{} not set", RESEND_API_KEY)))?;

    let text = request.text();
    let email = compose_feedback_email(text.as_deref(), &state.deps.feedback_to);
    let id = mailer
        .send_email(&email)
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    Ok(Json(FeedbackResponse { ok: true, id }))
}
