//! Skill Extractor: binary keyword matching against a fixed vocabulary.
//!
//! Matching is a case-insensitive substring test, nothing more: `ai` matches
//! inside "maintain" and `java` inside "javascript". Both the missing-skill
//! analysis and the per-resume skill listing use this one vocabulary.

/// Canonical skill vocabulary, lowercase, in reporting order.
pub const SKILL_VOCABULARY: [&str; 28] = [
    "python",
    "java",
    "javascript",
    "sql",
    "aws",
    "docker",
    "kubernetes",
    "machine learning",
    "ai",
    "data analysis",
    "project management",
    "agile",
    "scrum",
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "mongodb",
    "postgresql",
    "mysql",
    "git",
    "jenkins",
    "ci/cd",
    "rest api",
    "graphql",
    "microservices",
    "devops",
];

/// Result of checking one job text against one resume text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillGap {
    /// JD skills the resume also mentions.
    pub present: Vec<String>,
    /// JD skills the resume does not mention.
    pub missing: Vec<String>,
}

/// Returns the display names of every vocabulary skill found in `text`.
pub fn extract_skills(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    SKILL_VOCABULARY
        .iter()
        .filter(|skill| lower.contains(*skill))
        .map(|skill| display_name(skill))
        .collect()
}

/// Splits the JD's vocabulary skills into present and missing for a resume.
pub fn compare_skills(jd_text: &str, resume_text: &str) -> SkillGap {
    let jd_lower = jd_text.to_lowercase();
    let resume_lower = resume_text.to_lowercase();

    let mut gap = SkillGap::default();
    for skill in SKILL_VOCABULARY.iter().filter(|s| jd_lower.contains(*s)) {
        if resume_lower.contains(skill) {
            gap.present.push(display_name(skill));
        } else {
            gap.missing.push(display_name(skill));
        }
    }
    gap
}

/// Title-cases a keyword: every letter that follows a non-letter is upper-cased,
/// every other letter lower-cased ("node.js" -> "Node.Js").
pub fn display_name(skill: &str) -> String {
    let mut out = String::with_capacity(skill.len());
    let mut prev_is_letter = false;
    for c in skill.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_title_cases_each_word() {
        assert_eq!(display_name("python"), "Python");
        assert_eq!(display_name("machine learning"), "Machine Learning");
        assert_eq!(display_name("node.js"), "Node.Js");
        assert_eq!(display_name("ci/cd"), "Ci/Cd");
        assert_eq!(display_name("ai"), "Ai");
    }

    #[test]
    fn test_vocabulary_is_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for skill in SKILL_VOCABULARY {
            assert_eq!(skill, skill.to_lowercase());
            assert!(seen.insert(skill), "duplicate skill {skill}");
        }
    }

    #[test]
    fn test_extract_skills_case_insensitive() {
        let skills = extract_skills("Built REST API services with Docker and KUBERNETES");
        assert_eq!(skills, vec!["Docker", "Kubernetes", "Rest Api"]);
    }

    #[test]
    fn test_extract_skills_substring_semantics() {
        // "javascript" contains "java"; "maintained" contains "ai".
        let skills = extract_skills("Maintained JavaScript apps");
        assert_eq!(skills, vec!["Java", "Javascript", "Ai"]);
    }

    #[test]
    fn test_extract_skills_empty_text() {
        assert!(extract_skills("").is_empty());
    }

    #[test]
    fn test_compare_skills_python_docker_example() {
        let gap = compare_skills(
            "Looking for a Python and Docker engineer",
            "5 years Python backend, no containers experience",
        );
        assert_eq!(gap.present, vec!["Python"]);
        assert_eq!(gap.missing, vec!["Docker"]);
    }

    #[test]
    fn test_compare_skills_ignores_resume_only_skills() {
        let gap = compare_skills("We need SQL", "SQL, GraphQL, Vue");
        // GraphQL and Vue appear only in the resume, so they are ignored.
        assert_eq!(gap.present, vec!["Sql"]);
        assert!(gap.missing.is_empty());
    }

    #[test]
    fn test_compare_skills_missing_in_vocabulary_order() {
        let gap = compare_skills("devops, react, python", "nothing relevant here");
        assert!(gap.present.is_empty());
        assert_eq!(gap.missing, vec!["Python", "React", "Devops"]);
    }
}
