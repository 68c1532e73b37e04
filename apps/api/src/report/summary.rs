//! Evaluation report envelope returned by `POST /evaluate_candidates`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::result::MatchingResult;

/// Characters of the job description echoed back in a report.
pub const JD_PREVIEW_CHARS: usize = 500;

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub batch_id: Uuid,
    pub evaluated_at: DateTime<Utc>,
    /// Job description, truncated to `JD_PREVIEW_CHARS` with a trailing "...".
    pub job_description: String,
    /// Filename of the top-ranked candidate.
    pub best_candidate: Option<String>,
    pub results: Vec<MatchingResult>,
}

impl EvaluationReport {
    /// `results` must already be ranked best-first.
    pub fn new(batch_id: Uuid, jd_text: &str, results: Vec<MatchingResult>) -> Self {
        Self {
            batch_id,
            evaluated_at: Utc::now(),
            job_description: jd_preview(jd_text),
            best_candidate: results.first().map(|r| r.candidate.filename.clone()),
            results,
        }
    }
}

pub fn jd_preview(jd_text: &str) -> String {
    match jd_text.char_indices().nth(JD_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &jd_text[..cut]),
        None => jd_text.to_string(),
    }
}
