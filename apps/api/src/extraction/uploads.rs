//! Upload Store: writes uploaded documents into the upload directory.
//!
//! Paths are `<upload_dir>/<prefix><filename>`. Nothing is deduplicated or
//! locked: two uploads with the same name overwrite each other.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use axum::extract::Multipart;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

pub const JD_PREFIX: &str = "jd_";
pub const RESUME_PREFIX: &str = "resume_";

/// A file part received from a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub data: Bytes,
}

/// A multipart form split into text fields and file parts.
#[derive(Debug, Default)]
pub struct FormData {
    pub texts: HashMap<String, String>,
    /// `(field name, file)` in the order the client sent them.
    pub files: Vec<(String, UploadedFile)>,
}

impl FormData {
    /// Non-blank text value of `name`.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.texts
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// File parts sent under `name`.
    pub fn files_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a UploadedFile> {
        self.files
            .iter()
            .filter(move |(field, _)| field == name)
            .map(|(_, file)| file)
    }
}

/// Drains a multipart body. A part with a filename is a file; anything else
/// is text. Empty file inputs (no name, no bytes) are skipped.
pub async fn read_form(mut multipart: Multipart) -> Result<FormData, AppError> {
    let mut form = FormData::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        match field.file_name().map(str::to_string) {
            Some(filename) => {
                let data = field.bytes().await?;
                if filename.is_empty() && data.is_empty() {
                    continue;
                }
                form.files.push((name, UploadedFile { filename, data }));
            }
            None => {
                let value = field.text().await?;
                form.texts.insert(name, value);
            }
        }
    }

    Ok(form)
}

/// Reduces a client-supplied filename to its final path component.
pub fn sanitize_filename(filename: &str) -> Result<String, AppError> {
    // Browsers on Windows may send backslash-separated paths.
    let last = filename.rsplit(['/', '\\']).next().unwrap_or_default().trim();

    if last.is_empty() || last == "." || last == ".." {
        return Err(AppError::Validation(format!(
            "Invalid upload filename '{filename}'"
        )));
    }
    Ok(last.to_string())
}

/// Persists `file` under `upload_dir` and returns the written path.
pub async fn save_upload(
    upload_dir: &Path,
    prefix: &str,
    file: &UploadedFile,
) -> Result<PathBuf, AppError> {
    let name = sanitize_filename(&file.filename)?;
    let path = upload_dir.join(format!("{prefix}{name}"));

    tokio::fs::write(&path, &file.data)
        .await
        .with_context(|| format!("Failed to write upload to {}", path.display()))?;

    debug!("Saved {} bytes to {}", file.data.len(), path.display());
    Ok(path)
}
