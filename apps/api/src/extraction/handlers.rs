//! Axum route handler for job-description intake.

use std::path::Path;

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::uploads::{read_form, sanitize_filename, save_upload, JD_PREFIX};
use crate::extraction::{extract_text_from_file, DocumentFormat};
use crate::models::job::{JdSource, JobDescription};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadJdResponse {
    pub job_description: JobDescription,
    pub message: String,
}

/// POST /upload_jd
///
/// Accepts a job description as an uploaded document (`jd_file`) or as raw
/// text (`jd_text`). The file wins when both are sent.
pub async fn handle_upload_jd(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadJdResponse>, AppError> {
    let form = read_form(multipart).await?;

    let job_description = if let Some(file) = form.files_named("jd_file").next() {
        DocumentFormat::from_path(Path::new(&sanitize_filename(&file.filename)?))?;
        let path = save_upload(&state.config.upload_dir, JD_PREFIX, file).await?;
        let text = extract_text_from_file(&path).await?;
        info!("JD extracted from {} ({} chars)", file.filename, text.len());
        JobDescription::new(text, JdSource::File)
    } else if let Some(text) = form.text("jd_text") {
        JobDescription::new(text, JdSource::Text)
    } else {
        return Err(AppError::Validation(
            "Either file or text must be provided".to_string(),
        ));
    };

    Ok(Json(UploadJdResponse {
        job_description,
        message: "JD processed successfully".to_string(),
    }))
}
