use std::path::Path;

use serde::{Deserialize, Serialize};

/// An uploaded resume and the text extracted from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub filename: String,
    pub resume_text: String,
}

impl Candidate {
    pub fn new(filename: impl Into<String>, resume_text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            resume_text: resume_text.into(),
        }
    }

    /// The filename with its extension stripped, used to address the candidate.
    pub fn display_name(&self) -> &str {
        Path::new(&self.filename)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.filename)
    }
}
