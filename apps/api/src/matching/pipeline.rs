//! Evaluation Pipeline: scores every candidate against one job description
//! and ranks them.
//!
//! Flow per candidate: similarity → missing skills + remark → skill listing.
//! Candidates are evaluated sequentially and independently; no candidate is
//! ever dropped. Final order is `(score desc, input index asc)`.

use tracing::{debug, warn};

use crate::matching::remarks::analyze_missing_skills;
use crate::matching::similarity::{Similarity, SimilarityScorer};
use crate::matching::skills::extract_skills;
use crate::models::candidate::Candidate;
use crate::models::result::MatchingResult;

/// Evaluates `candidates` against `jd_text` and returns one result each,
/// best score first.
pub async fn evaluate_candidates(
    jd_text: &str,
    candidates: &[Candidate],
    scorer: &dyn SimilarityScorer,
) -> Vec<MatchingResult> {
    let mut results = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        results.push(evaluate_candidate(jd_text, candidate, scorer).await);
    }

    rank(&mut results);
    results
}

async fn evaluate_candidate(
    jd_text: &str,
    candidate: &Candidate,
    scorer: &dyn SimilarityScorer,
) -> MatchingResult {
    let similarity = scorer.similarity(jd_text, &candidate.resume_text).await;
    if let Similarity::Degraded { reason } = &similarity {
        warn!(
            "Similarity degraded to 0 for {}: {reason}",
            candidate.filename
        );
    }

    let (missing_skills, remark) = analyze_missing_skills(jd_text, &candidate.resume_text);
    let candidate_skills = extract_skills(&candidate.resume_text);

    debug!(
        "Scored {}: {:.2} ({} missing skills)",
        candidate.filename,
        similarity.score(),
        missing_skills.len()
    );

    MatchingResult {
        candidate: candidate.clone(),
        score: similarity.score(),
        missing_skills,
        remarks: remark.text,
        match_tier: remark.tier,
        candidate_skills,
        interview_email: None,
        rejection_email: None,
    }
}

/// Sorts by score descending. `sort_by` is stable, so ties keep upload order.
fn rank(results: &mut [MatchingResult]) {
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::remarks::MatchTier;
    use crate::matching::similarity::fakes::FixedScorer;

    const JD: &str = "Looking for a Python and Docker engineer";

    fn filenames(results: &[MatchingResult]) -> Vec<&str> {
        results.iter().map(|r| r.candidate.filename.as_str()).collect()
    }

    #[tokio::test]
    async fn test_results_sorted_by_score_desc() {
        let candidates = vec![
            Candidate::new("low.pdf", "low"),
            Candidate::new("high.pdf", "high"),
            Candidate::new("mid.pdf", "mid"),
        ];
        let scorer = FixedScorer::new(&[("low", 10.0), ("high", 90.5), ("mid", 55.0)]);

        let results = evaluate_candidates(JD, &candidates, &scorer).await;

        assert_eq!(filenames(&results), vec!["high.pdf", "mid.pdf", "low.pdf"]);
        assert_eq!(results[0].score, 90.5);
    }

    #[tokio::test]
    async fn test_ties_keep_upload_order() {
        let candidates = vec![
            Candidate::new("a.pdf", "a"),
            Candidate::new("b.pdf", "b"),
            Candidate::new("c.pdf", "c"),
            Candidate::new("d.pdf", "d"),
        ];
        let scorer = FixedScorer::new(&[("a", 40.0), ("b", 70.0), ("c", 40.0), ("d", 70.0)]);

        let results = evaluate_candidates(JD, &candidates, &scorer).await;

        assert_eq!(filenames(&results), vec!["b.pdf", "d.pdf", "a.pdf", "c.pdf"]);
    }

    #[tokio::test]
    async fn test_near_zero_negative_cosine_ties_with_zero() {
        use std::sync::Arc;

        use crate::errors::AppError;
        use crate::matching::similarity::{Embedder, EmbeddingScorer};

        struct AxisEmbedder;

        impl Embedder for AxisEmbedder {
            fn embed(&self, text: &str) -> Result<Vec<f32>, AppError> {
                Ok(match text {
                    JD => vec![1.0, 0.0],
                    "slightly opposed" => vec![-0.00001, 1.0],
                    _ => vec![0.0, 1.0],
                })
            }
        }

        let candidates = vec![
            Candidate::new("first.pdf", "slightly opposed"),
            Candidate::new("second.pdf", "orthogonal"),
        ];
        let scorer = EmbeddingScorer::new(Arc::new(AxisEmbedder));

        let results = evaluate_candidates(JD, &candidates, &scorer).await;

        assert_eq!(filenames(&results), vec!["first.pdf", "second.pdf"]);
        assert!(results.iter().all(|r| r.score == 0.0 && r.score.is_sign_positive()));
    }

    #[tokio::test]
    async fn test_degraded_candidates_are_kept_at_zero() {
        let candidates = vec![
            Candidate::new("unknown.pdf", "no preset"),
            Candidate::new("known.pdf", "known"),
        ];
        let scorer = FixedScorer::new(&[("known", 12.0)]);

        let results = evaluate_candidates(JD, &candidates, &scorer).await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[1].candidate.filename, "unknown.pdf");
        assert_eq!(results[1].score, 0.0);
    }

    #[tokio::test]
    async fn test_empty_batch_yields_no_results() {
        let scorer = FixedScorer::new(&[]);
        assert!(evaluate_candidates(JD, &[], &scorer).await.is_empty());
    }

    #[tokio::test]
    async fn test_result_carries_skill_analysis() {
        let resume = "5 years Python backend, no containers experience";
        let candidates = vec![Candidate::new("jane.pdf", resume)];
        let scorer = FixedScorer::new(&[(resume, 52.3)]);

        let results = evaluate_candidates(JD, &candidates, &scorer).await;
        let result = &results[0];

        assert_eq!(result.missing_skills, vec!["Docker"]);
        assert_eq!(result.match_tier, MatchTier::Strong);
        assert!(result.remarks.contains("Docker"));
        // "containers" contains "ai": substring matching is intentionally crude.
        assert_eq!(result.candidate_skills, vec!["Python", "Ai"]);
        assert!(result.interview_email.is_none());
        assert!(result.rejection_email.is_none());
    }

    #[tokio::test]
    async fn test_ten_candidates_all_returned() {
        let texts: Vec<String> = (0..10).map(|i| format!("resume {i}")).collect();
        let candidates: Vec<Candidate> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Candidate::new(format!("cv{i}.pdf"), t.clone()))
            .collect();
        let presets: Vec<(&str, f64)> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), (i % 3) as f64 * 10.0))
            .collect();
        let scorer = FixedScorer::new(&presets);

        let results = evaluate_candidates(JD, &candidates, &scorer).await;

        assert_eq!(results.len(), 10);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(results.iter().all(|r| (0.0..=100.0).contains(&r.score)));
    }
}
