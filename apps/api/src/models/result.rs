use serde::{Deserialize, Serialize};

use crate::matching::remarks::MatchTier;
use crate::models::candidate::Candidate;

/// One candidate's evaluation against a job description.
///
/// Built by the evaluation pipeline, then mutated exactly once to attach the
/// interview and rejection emails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingResult {
    pub candidate: Candidate,
    /// Relevance percentage in [0, 100], rounded to 2 decimals.
    pub score: f64,
    /// JD skills absent from the resume, in vocabulary order.
    pub missing_skills: Vec<String>,
    pub remarks: String,
    pub match_tier: MatchTier,
    /// Vocabulary skills found anywhere in the resume.
    pub candidate_skills: Vec<String>,
    pub interview_email: Option<String>,
    pub rejection_email: Option<String>,
}
