//! Axum route handler for job-description generation.

use axum::{
    extract::{FromRequest, Request, State},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::generation::jd_generator::{JdDraft, JobDescriptionRequest};
use crate::models::job::{JdSource, JobDescription};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateJdResponse {
    pub job_description: JobDescription,
}

/// POST /generate_jd
///
/// Body is JSON or an urlencoded form with the same field names.
/// Drafts a job description from the structured fields. Succeeds whenever the
/// request validates: LLM problems fall back to the template silently.
pub async fn handle_generate_jd(
    State(state): State<AppState>,
    req: Request,
) -> Result<Json<GenerateJdResponse>, AppError> {
    let request = read_request(req, &state).await?;
    request.validate()?;

    let draft = state.jd_generator.generate(&request).await;
    if let JdDraft::Template { reason, .. } = &draft {
        debug!("JD for '{}' built from template: {}", request.job_title, reason.describe());
    }

    Ok(Json(GenerateJdResponse {
        job_description: JobDescription::new(draft.into_text(), JdSource::Generated),
    }))
}

async fn read_request(req: Request, state: &AppState) -> Result<JobDescriptionRequest, AppError> {
    let is_form = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

    if is_form {
        let Form(request) = Form::<JobDescriptionRequest>::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        Ok(request)
    } else {
        let Json(request) = Json::<JobDescriptionRequest>::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        Ok(request)
    }
}
