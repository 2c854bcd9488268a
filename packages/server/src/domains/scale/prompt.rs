//! Prompt builder: serializes a scored questionnaire into an LLM request.

use super::analysis::AnalysisResult;
use super::models::{Criterion, Gender, ScoreVector};

const INSTRUCTIONS: &str = "Дай краткий анализ (3-4 абзаца):
1. Общая оценка ситуации
2. Ключевые сильные стороны
3. Зоны риска и на что обратить внимание
4. Рекомендации по стратегии отношений";

/// One `"<name>: <score>/10"` line per criterion, in catalog order.
pub fn score_lines(scores: &ScoreVector, gender: Gender) -> Vec<String> {
    Criterion::catalog(gender)
        .iter()
        .zip(scores.iter())
        .map(|(criterion, score)| format!("{}: {}/10", criterion.name, score))
        .collect()
}

/// Build the analysis request sent to the LLM.
///
/// Optional sections (penalty, red flags, golden standard) keep their line
/// even when empty, so the layout of the block never shifts.
pub fn build_prompt(scores: &ScoreVector, analysis: &AnalysisResult, gender: Gender) -> String {
    let scores_list = score_lines(scores, gender).join("\n");

    let penalty = analysis
        .penalty
        .as_ref()
        .map(|p| format!("\n{}", p))
        .unwrap_or_default();

    let red_flags = if analysis.red_flags.is_empty() {
        String::new()
    } else {
        format!(
            "Красные флаги: низкие баллы по пунктам {} (≤3)",
            analysis.red_flags.join(", ")
        )
    };

    let golden = if analysis.is_golden_standard {
        "Соответствует золотому стандарту (75+ и все пункты ≥6)!"
    } else {
        ""
    };

    format!(
        "Анализ {subject} по шкале оценки отношений (Cold Format).

Оценки (0-10):
{scores_list}

Итого: {total}/100
Категория: {category}
{penalty}
{red_flags}
{golden}

{INSTRUCTIONS}",
        subject = gender.subject_label(),
        total = analysis.total,
        category = analysis.category,
    )
}
