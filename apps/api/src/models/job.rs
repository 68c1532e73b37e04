use serde::{Deserialize, Serialize};

/// Where a job description's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JdSource {
    /// Extracted from an uploaded PDF/DOC/DOCX.
    File,
    /// Pasted into the form as raw text.
    Text,
    /// Produced by the job-description generator.
    Generated,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescription {
    pub text: String,
    pub source: JdSource,
}

impl JobDescription {
    pub fn new(text: impl Into<String>, source: JdSource) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }
}
