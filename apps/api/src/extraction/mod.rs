//! Text Extractor: turns uploaded PDF / DOC / DOCX files into plain text.
//!
//! The format is decided by extension alone, before any bytes are read, so an
//! unsupported upload always fails with `UnsupportedFormat` and never yields
//! an empty string. Parsing runs on the blocking pool; a parser panic on a
//! malformed document is reported as `ExtractionFailure`.

pub mod handlers;
pub mod uploads;

use std::path::Path;

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
use tracing::debug;

use crate::errors::AppError;

/// Document formats the extractor accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    /// `.doc` and `.docx` both go through the Office Open XML reader.
    Word,
}

impl DocumentFormat {
    /// Classifies a path by its (case-insensitive) extension.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("pdf") => Ok(DocumentFormat::Pdf),
            Some("doc") | Some("docx") => Ok(DocumentFormat::Word),
            Some(other) => Err(AppError::UnsupportedFormat(format!(
                "'.{other}' is not one of .pdf, .doc, .docx"
            ))),
            None => Err(AppError::UnsupportedFormat(format!(
                "'{}' has no file extension",
                path.display()
            ))),
        }
    }
}

/// Extracts trimmed plain text from the document at `path`.
pub async fn extract_text_from_file(path: &Path) -> Result<String, AppError> {
    let format = DocumentFormat::from_path(path)?;

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        AppError::ExtractionFailure(format!("cannot read '{}': {e}", path.display()))
    })?;

    let text = tokio::task::spawn_blocking(move || extract_text_from_bytes(format, &bytes))
        .await
        .map_err(|e| AppError::ExtractionFailure(format!("document parser crashed: {e}")))??;

    debug!(
        "Extracted {} chars from {}",
        text.chars().count(),
        path.display()
    );
    Ok(text)
}

/// Synchronous parse of an in-memory document.
pub fn extract_text_from_bytes(format: DocumentFormat, bytes: &[u8]) -> Result<String, AppError> {
    match format {
        DocumentFormat::Pdf => extract_pdf_text(bytes),
        DocumentFormat::Word => extract_word_text(bytes),
    }
}

fn extract_pdf_text(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map(|text| text.trim().to_string())
        .map_err(|e| AppError::ExtractionFailure(format!("unreadable PDF: {e}")))
}

fn extract_word_text(bytes: &[u8]) -> Result<String, AppError> {
    let docx = read_docx(bytes)
        .map_err(|e| AppError::ExtractionFailure(format!("unreadable Word document: {e}")))?;

    let mut text = String::new();
    for child in docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            push_paragraph_text(paragraph.children, &mut text);
            text.push('\n');
        }
    }

    Ok(text.trim().to_string())
}

/// Appends run text, descending into hyperlinks.
fn push_paragraph_text(children: Vec<ParagraphChild>, text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in run.children {
                    if let RunChild::Text(t) = run_child {
                        text.push_str(&t.text);
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_paragraph_text(link.children, text),
            _ => {}
        }
    }
}
