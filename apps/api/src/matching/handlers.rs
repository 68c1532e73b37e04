//! Axum route handler for candidate evaluation.

use std::path::Path;

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::uploads::{read_form, sanitize_filename, save_upload, RESUME_PREFIX};
use crate::extraction::{extract_text_from_file, DocumentFormat};
use crate::matching::pipeline::evaluate_candidates;
use crate::models::candidate::Candidate;
use crate::report::email::attach_emails;
use crate::report::summary::EvaluationReport;
use crate::state::AppState;

/// Hard cap on resumes per evaluation request.
pub const MAX_RESUMES: usize = 10;

/// POST /evaluate_candidates
///
/// Multipart body: `job_description` (text) plus 1–10 `resume_files`.
/// Every resume is validated by extension before anything is written, then
/// saved, extracted, scored and ranked. Returns the ranked report with
/// interview and rejection emails attached to every result.
pub async fn handle_evaluate_candidates(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<EvaluationReport>, AppError> {
    let form = read_form(multipart).await?;

    let jd_text = form
        .text("job_description")
        .ok_or_else(|| AppError::Validation("job_description is required".to_string()))?;

    let resumes: Vec<_> = form.files_named("resume_files").collect();
    if resumes.len() > MAX_RESUMES {
        return Err(AppError::Validation(format!(
            "Maximum {MAX_RESUMES} resumes allowed"
        )));
    }
    if resumes.is_empty() {
        return Err(AppError::Validation(
            "At least one resume is required".to_string(),
        ));
    }

    let mut filenames = Vec::with_capacity(resumes.len());
    for file in &resumes {
        let filename = sanitize_filename(&file.filename)?;
        DocumentFormat::from_path(Path::new(&filename))?;
        filenames.push(filename);
    }

    let batch_id = Uuid::new_v4();
    info!(%batch_id, "Evaluating {} candidates", resumes.len());

    let mut candidates = Vec::with_capacity(resumes.len());
    for (file, filename) in resumes.into_iter().zip(filenames) {
        let path = save_upload(&state.config.upload_dir, RESUME_PREFIX, file).await?;
        let resume_text = extract_text_from_file(&path).await?;
        candidates.push(Candidate::new(filename, resume_text));
    }

    let mut results = evaluate_candidates(jd_text, &candidates, state.scorer.as_ref()).await;
    for result in &mut results {
        attach_emails(result);
    }

    if let Some(best) = results.first() {
        info!(
            %batch_id,
            "Best candidate: {} ({:.2})",
            best.candidate.filename, best.score
        );
    }

    Ok(Json(EvaluationReport::new(batch_id, jd_text, results)))
}
