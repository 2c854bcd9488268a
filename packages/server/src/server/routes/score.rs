use axum::{body::Bytes, Json};
use serde::{Deserialize, Serialize};

use crate::domains::scale::{analyze, build_prompt, AnalysisResult, Gender, ScoreVector};
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub gender: Gender,
    pub scores: Vec<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub analysis: AnalysisResult,
    pub prompt: String,
}

/// Score a questionnaire and return the analysis with its LLM prompt.
pub async fn score_handler(body: Bytes) -> Result<Json<ScoreResponse>, ApiError> {
    let request: ScoreRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let scores =
        ScoreVector::try_from(request.scores).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let analysis = analyze(&scores, request.gender);
    let prompt = build_prompt(&scores, &analysis, request.gender);

    tracing::debug!(
        gender = %request.gender,
        total = analysis.total,
        category = %analysis.category_class,
        penalized = analysis.penalty.is_some(),
        "Scored questionnaire"
    );

    Ok(Json(ScoreResponse { analysis, prompt }))
}
