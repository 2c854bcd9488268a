use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::kernel::no_provider_message;
use crate::server::app::AppState;
use crate::server::error::ApiError;

use super::parse_json_body;

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub response: String,
}

/// Forward a prompt to the configured LLM provider and return its text.
pub async fn analyze_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let request: AnalyzeRequest =
        parse_json_body(&body).map_err(|e| ApiError::Internal(e.to_string()))?;

    let prompt = request
        .prompt
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Prompt is required".to_string()))?;

    let ai = state
        .deps
        .ai
        .as_ref()
        .ok_or_else(|| ApiError::Config(no_provider_message()))?;

    let response = ai
        .complete(&prompt)
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    Ok(Json(AnalyzeResponse { response }))
}
