use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    llm_provider: Option<String>,
    mailer_configured: bool,
}

/// Health check endpoint
///
/// Reports which LLM provider is active and whether feedback mail can be
/// sent. Always 200: missing credentials only fail the routes that need them.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        llm_provider: state.deps.ai_provider_name().map(String::from),
        mailer_configured: state.deps.mailer.is_some(),
    })
}
