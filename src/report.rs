//! Terminal and JSON presentation of an [`Evaluation`].

use serde::Serialize;

use crate::MAX_SCORE;
use crate::domain::score::Score;
use crate::processing::Evaluation;

const BAR_LABEL: &str = "Score |";

/// Horizontal bar on a fixed 0..=10 axis.
///
/// The bar is clamped to the axis; the printed number is not.
pub fn score_bar(score: Score) -> String {
    let width = MAX_SCORE as usize;
    let filled = score.get().clamp(0, MAX_SCORE) as usize;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(width - filled));
    let axis_pad = BAR_LABEL.len() - 1;

    format!(
        "{BAR_LABEL}{bar}| {score}\n{:axis_pad$}0{:>width$}",
        "",
        MAX_SCORE,
        width = width + 1
    )
}

/// Plain-text report: the service's answer, the metric and the chart.
pub fn render_text(evaluation: &Evaluation, show_documents: bool) -> String {
    let mut out = String::new();
    if show_documents {
        out.push_str(&format!(
            "{}\n\n---\n\n{}\n\n---\n\n",
            evaluation.job_posting, evaluation.resume
        ));
    }
    out.push_str(evaluation.response.trim());
    out.push_str(&format!(
        "\n\nCandidate score: {}/{MAX_SCORE}\n\n{}\n",
        evaluation.score,
        score_bar(evaluation.score)
    ));
    out
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    job_posting: String,
    resume: String,
    response: &'a str,
    score: Score,
    max_score: i64,
}

/// Machine-readable report.
pub fn render_json(evaluation: &Evaluation) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        job_posting: evaluation.job_posting.render(),
        resume: evaluation.resume.render(),
        response: &evaluation.response,
        score: evaluation.score,
        max_score: MAX_SCORE,
    })
}
