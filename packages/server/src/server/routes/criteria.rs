use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::domains::scale::{CategoryRule, Criterion, Gender};
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct CriteriaQuery {
    pub gender: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CriteriaResponse {
    pub gender: Gender,
    pub criteria: &'static [Criterion],
    pub categories: &'static [CategoryRule],
}

/// Questionnaire catalog for rendering: criteria and category table.
pub async fn criteria_handler(
    Query(query): Query<CriteriaQuery>,
) -> Result<Json<CriteriaResponse>, ApiError> {
    let gender: Gender = query
        .gender
        .as_deref()
        .ok_or_else(|| ApiError::BadRequest("gender is required".to_string()))?
        .parse()
        .map_err(|e: crate::domains::scale::ScaleError| ApiError::BadRequest(e.to_string()))?;

    Ok(Json(CriteriaResponse {
        gender,
        criteria: Criterion::catalog(gender),
        categories: CategoryRule::rules(gender),
    }))
}
