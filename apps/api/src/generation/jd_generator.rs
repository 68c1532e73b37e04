//! JD Generator: drafts a job description from seven structured fields.
//!
//! With an LLM credential configured the draft comes from one completion
//! call. Without one, or when the call fails, the deterministic template is
//! used instead. Which path was taken is explicit in `JdDraft`; failures are
//! logged and never reach the caller.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::prompts::JD_PROMPT_TEMPLATE;
use crate::llm_client::LlmClient;

/// Structured input for job-description generation. All fields are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobDescriptionRequest {
    pub job_title: String,
    pub years_experience: String,
    /// Comma-separated skill list.
    pub must_have_skills: String,
    pub company_name: String,
    pub employment_type: String,
    pub industry: String,
    pub location: String,
}

impl JobDescriptionRequest {
    /// Rejects the request if any field is blank, naming every blank field.
    pub fn validate(&self) -> Result<(), AppError> {
        let blank: Vec<&str> = self
            .fields()
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect();

        if blank.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "Missing required field(s): {}",
                blank.join(", ")
            )))
        }
    }

    fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("job_title", self.job_title.as_str()),
            ("years_experience", self.years_experience.as_str()),
            ("must_have_skills", self.must_have_skills.as_str()),
            ("company_name", self.company_name.as_str()),
            ("employment_type", self.employment_type.as_str()),
            ("industry", self.industry.as_str()),
            ("location", self.location.as_str()),
        ]
    }

    /// The LLM prompt with every placeholder filled in.
    pub fn prompt(&self) -> String {
        self.fields()
            .into_iter()
            .fold(JD_PROMPT_TEMPLATE.to_string(), |prompt, (name, value)| {
                prompt.replace(&format!("{{{name}}}"), value)
            })
    }
}

/// Why the template was used instead of the LLM.
#[derive(Debug, Clone, PartialEq)]
pub enum FallbackReason {
    NoCredential,
    ServiceFailed(String),
}

impl FallbackReason {
    pub fn describe(&self) -> &str {
        match self {
            FallbackReason::NoCredential => "no LLM credential configured",
            FallbackReason::ServiceFailed(e) => e,
        }
    }
}

/// A generated job description and the path that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum JdDraft {
    Llm(String),
    Template {
        text: String,
        reason: FallbackReason,
    },
}

impl JdDraft {
    pub fn into_text(self) -> String {
        match self {
            JdDraft::Llm(text) => text,
            JdDraft::Template { text, .. } => text,
        }
    }
}

/// Constructed once at startup and shared through `AppState`.
#[derive(Clone)]
pub struct JdGenerator {
    llm: Option<LlmClient>,
}

impl JdGenerator {
    pub fn new(llm: Option<LlmClient>) -> Self {
        Self { llm }
    }

    /// Always produces a draft: LLM output when available, template otherwise.
    pub async fn generate(&self, request: &JobDescriptionRequest) -> JdDraft {
        let Some(llm) = &self.llm else {
            return JdDraft::Template {
                text: render_template(request),
                reason: FallbackReason::NoCredential,
            };
        };

        match complete(llm, request).await {
            Ok(text) => {
                info!("Generated JD for '{}' via LLM", request.job_title);
                JdDraft::Llm(text)
            }
            Err(e) => {
                warn!("LLM JD generation failed, using template: {e}");
                JdDraft::Template {
                    text: render_template(request),
                    reason: FallbackReason::ServiceFailed(e.to_string()),
                }
            }
        }
    }
}

async fn complete(llm: &LlmClient, request: &JobDescriptionRequest) -> Result<String, AppError> {
    Ok(llm.complete(&request.prompt()).await?)
}

/// Deterministic job description built from the request fields.
pub fn render_template(r: &JobDescriptionRequest) -> String {
    let skills = r
        .must_have_skills
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Job Title: {title}
Company: {company}
Location: {location}
Employment Type: {employment}
Industry: {industry}
Must-have Skills: {raw_skills}

Job Summary:
We are seeking an experienced {title} with {years} years of experience to join our dynamic team at {company}. The ideal candidate will play a key role in driving success in the {industry} industry.

Key Responsibilities:
• Develop and implement strategic initiatives
• Collaborate with cross-functional teams
• Drive projects from conception to completion
• Analyze and optimize business processes

Required Qualifications:
• {years} years of relevant experience
• Proficiency in: {skills}
• Strong communication and leadership skills
• Bachelor's degree in relevant field

Preferred Qualifications:
• Master's degree or higher
• Experience in {industry} industry
• Professional certifications

What We Offer:
• Competitive salary and benefits
• Professional development opportunities
• Dynamic and inclusive work environment
• Career growth potential",
        title = r.job_title,
        company = r.company_name,
        location = r.location,
        employment = r.employment_type,
        industry = r.industry,
        raw_skills = r.must_have_skills,
        years = r.years_experience,
        skills = skills,
    )
}
