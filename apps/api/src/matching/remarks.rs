//! Remark Generator: a five-bucket decision table over the skill gap.

use serde::{Deserialize, Serialize};

use crate::matching::skills::{compare_skills, SkillGap};

/// Which bucket of the decision table a candidate fell into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    LacksMostSkills,
    AllSkillsMatched,
    Strong,
    Moderate,
    Limited,
}

impl MatchTier {
    /// Buckets are checked in order: no overlap first, then by missing count.
    pub fn classify(present_count: usize, missing_count: usize) -> Self {
        match (present_count, missing_count) {
            (0, _) => MatchTier::LacksMostSkills,
            (_, 0) => MatchTier::AllSkillsMatched,
            (_, 1..=2) => MatchTier::Strong,
            (_, 3..=4) => MatchTier::Moderate,
            _ => MatchTier::Limited,
        }
    }
}

/// Remark text plus the tier it was drawn from.
#[derive(Debug, Clone, PartialEq)]
pub struct Remark {
    pub tier: MatchTier,
    pub text: String,
}

/// Builds the remark for a skill gap.
pub fn generate_remark(gap: &SkillGap) -> Remark {
    let tier = MatchTier::classify(gap.present.len(), gap.missing.len());
    let text = match tier {
        MatchTier::LacksMostSkills => "Candidate lacks most required technical skills".to_string(),
        MatchTier::AllSkillsMatched => {
            "Excellent match! Candidate possesses all key technical skills".to_string()
        }
        MatchTier::Strong => format!(
            "Strong candidate with most required skills. Missing: {}",
            first_n(&gap.missing, 2)
        ),
        MatchTier::Moderate => format!(
            "Moderate match. Has core skills but missing: {}",
            first_n(&gap.missing, 3)
        ),
        MatchTier::Limited => format!(
            "Limited match. Candidate lacks several key skills including {}",
            first_n(&gap.missing, 3)
        ),
    };
    Remark { tier, text }
}

/// Missing-skill analysis: the JD skills absent from the resume and the
/// remark describing the gap.
pub fn analyze_missing_skills(jd_text: &str, resume_text: &str) -> (Vec<String>, Remark) {
    let gap = compare_skills(jd_text, resume_text);
    let remark = generate_remark(&gap);
    (gap.missing, remark)
}

fn first_n(skills: &[String], n: usize) -> String {
    skills.iter().take(n).cloned().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gap(present: &[&str], missing: &[&str]) -> SkillGap {
        SkillGap {
            present: present.iter().map(|s| s.to_string()).collect(),
            missing: missing.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_no_overlap_lacks_most_skills() {
        let remark = generate_remark(&gap(&[], &["Python", "Docker"]));
        assert_eq!(remark.tier, MatchTier::LacksMostSkills);
        assert_eq!(remark.text, "Candidate lacks most required technical skills");
    }

    #[test]
    fn test_no_jd_skills_falls_in_lowest_tier() {
        // No present overlap is checked before "nothing missing".
        let remark = generate_remark(&gap(&[], &[]));
        assert_eq!(remark.tier, MatchTier::LacksMostSkills);
    }

    #[test]
    fn test_nothing_missing_is_excellent() {
        let remark = generate_remark(&gap(&["Python"], &[]));
        assert_eq!(remark.tier, MatchTier::AllSkillsMatched);
        assert!(remark.text.starts_with("Excellent match!"));
    }

    #[test]
    fn test_two_missing_is_strong() {
        let remark = generate_remark(&gap(&["Python"], &["Docker", "Aws"]));
        assert_eq!(remark.tier, MatchTier::Strong);
        assert_eq!(
            remark.text,
            "Strong candidate with most required skills. Missing: Docker, Aws"
        );
    }

    #[test]
    fn test_four_missing_is_moderate_and_names_three() {
        let remark = generate_remark(&gap(&["Python"], &["Docker", "Aws", "Git", "Vue"]));
        assert_eq!(remark.tier, MatchTier::Moderate);
        assert_eq!(
            remark.text,
            "Moderate match. Has core skills but missing: Docker, Aws, Git"
        );
    }

    #[test]
    fn test_five_missing_is_limited() {
        let remark = generate_remark(&gap(
            &["Python"],
            &["Docker", "Aws", "Git", "Vue", "React"],
        ));
        assert_eq!(remark.tier, MatchTier::Limited);
        assert_eq!(
            remark.text,
            "Limited match. Candidate lacks several key skills including Docker, Aws, Git"
        );
    }

    #[test]
    fn test_classify_bucket_edges() {
        assert_eq!(MatchTier::classify(1, 1), MatchTier::Strong);
        assert_eq!(MatchTier::classify(1, 3), MatchTier::Moderate);
        assert_eq!(MatchTier::classify(2, 5), MatchTier::Limited);
        assert_eq!(MatchTier::classify(0, 0), MatchTier::LacksMostSkills);
    }

    #[test]
    fn test_analyze_missing_skills_mentions_docker() {
        let (missing, remark) = analyze_missing_skills(
            "Looking for a Python and Docker engineer",
            "5 years Python backend, no containers experience",
        );
        assert_eq!(missing, vec!["Docker"]);
        assert_eq!(remark.tier, MatchTier::Strong);
        assert!(remark.text.contains("Docker"));
    }

    #[test]
    fn test_resume_with_every_jd_skill_matches_all() {
        let jd = "Kubernetes, GraphQL and microservices on AWS";
        let (missing, remark) =
            analyze_missing_skills(jd, "I run microservices with GraphQL on AWS Kubernetes");
        assert!(missing.is_empty());
        assert_eq!(remark.tier, MatchTier::AllSkillsMatched);
    }

    #[test]
    fn test_zero_overlap_is_lacks_most_skills() {
        let (missing, remark) =
            analyze_missing_skills("Python, Docker, Jenkins", "Accountant, Excel expert");
        assert_eq!(missing, vec!["Python", "Docker", "Jenkins"]);
        assert_eq!(remark.tier, MatchTier::LacksMostSkills);
    }
}
