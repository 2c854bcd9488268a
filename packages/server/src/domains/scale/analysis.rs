//! Scoring engine: total, category, penalty, red flags and golden standard.
//!
//! Pure functions only. The two low-score thresholds below are deliberately
//! distinct: the penalty uses a strict `< 4`, red flags use `<= 3`.

use serde::{Deserialize, Serialize};

use super::models::{CategoryRule, Gender, ScoreVector};

/// Penalty fires when a penalty criterion scores strictly below this.
pub const PENALTY_THRESHOLD: i32 = 4;
/// Zero-based indices of criteria 1 (loyalty) and 3 (domestic fitness).
pub const PENALTY_CRITERIA: [usize; 2] = [0, 2];

/// Red flag fires when a flagged criterion scores at or below this.
pub const RED_FLAG_THRESHOLD: i32 = 3;
/// Zero-based indices of criteria 1 (loyalty) and 8 (respect).
pub const RED_FLAG_CRITERIA: [usize; 2] = [0, 7];

pub const GOLDEN_MIN_TOTAL: i32 = 75;
pub const GOLDEN_MIN_SCORE: i32 = 6;

/// Outcome of scoring one questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub total: i32,
    pub category: String,
    pub category_class: String,
    pub description: String,
    pub penalty: Option<String>,
    /// Criterion ids ("1", "8") in ascending order.
    pub red_flags: Vec<String>,
    pub is_golden_standard: bool,
}

/// Score a questionnaire.
///
/// Penalty, red flags and golden standard are evaluated independently of
/// each other; a penalized result can still report `is_golden_standard`
/// if its scores satisfy that rule on their own.
pub fn analyze(scores: &ScoreVector, gender: Gender) -> AnalysisResult {
    let total = scores.total();

    let is_penalized = PENALTY_CRITERIA
        .iter()
        .any(|&i| scores[i] < PENALTY_THRESHOLD);

    let red_flags = RED_FLAG_CRITERIA
        .iter()
        .filter(|&&i| scores[i] <= RED_FLAG_THRESHOLD)
        .map(|&i| (i + 1).to_string())
        .collect();

    let is_golden_standard =
        total >= GOLDEN_MIN_TOTAL && scores.iter().all(|s| s >= GOLDEN_MIN_SCORE);

    let rule = if is_penalized {
        CategoryRule::catch_all(gender)
    } else {
        CategoryRule::for_total(gender, total)
    };

    let penalty = is_penalized.then(|| penalty_message(gender));

    AnalysisResult {
        total,
        category: rule.name.to_string(),
        category_class: rule.class_tag.to_string(),
        description: rule.description.to_string(),
        penalty,
        red_flags,
        is_golden_standard,
    }
}

fn penalty_message(gender: Gender) -> String {
    format!(
        "Применён штраф: по Верности (п.1) или Пригодности к быту (п.3) < {} → итог «{}».",
        PENALTY_THRESHOLD,
        CategoryRule::catch_all(gender).name
    )
}
