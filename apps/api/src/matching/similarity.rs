//! Similarity Scorer: semantic relevance of a resume to a job description.
//!
//! Both texts are embedded with a static sentence-embedding model and compared
//! by cosine similarity, reported as a percentage in [0, 100].
//!
//! Scoring never fails: any problem (empty text, model unavailable, model
//! error, degenerate vectors) produces `Similarity::Degraded`, which ranks as
//! 0.0. `AppState` holds an `Arc<dyn SimilarityScorer>` built once in `main`.

use std::sync::Arc;

use async_trait::async_trait;
use model2vec_rs::model::StaticModel;
use tracing::info;

use crate::errors::AppError;

/// Outcome of one similarity computation.
#[derive(Debug, Clone, PartialEq)]
pub enum Similarity {
    /// Percentage in [0, 100], rounded to 2 decimals.
    Scored(f64),
    /// Scoring could not run; the candidate ranks with 0.0.
    Degraded { reason: String },
}

impl Similarity {
    pub fn score(&self) -> f64 {
        match self {
            Similarity::Scored(score) => *score,
            Similarity::Degraded { .. } => 0.0,
        }
    }

    fn degraded(reason: impl Into<String>) -> Self {
        Similarity::Degraded {
            reason: reason.into(),
        }
    }
}

/// Turns text into a dense vector. Implementations may block.
pub trait Embedder: Send + Sync {
    fn embed(&self, text: &str) -> Result<Vec<f32>, AppError>;
}

/// Swappable scorer backend. Carried in `AppState` as `Arc<dyn SimilarityScorer>`.
#[async_trait]
pub trait SimilarityScorer: Send + Sync {
    async fn similarity(&self, jd_text: &str, resume_text: &str) -> Similarity;
}

// ────────────────────────────────────────────────────────────────────────────
// model2vec backend
// ────────────────────────────────────────────────────────────────────────────

/// model2vec static embedding model, loaded once per process.
pub struct StaticModelEmbedder {
    model: StaticModel,
}

impl StaticModelEmbedder {
    /// Loads from a local folder or downloads from the HuggingFace Hub. Blocking.
    pub fn load(repo_or_path: &str) -> Result<Self, AppError> {
        info!("Loading embedding model {repo_or_path}...");
        let model = StaticModel::from_pretrained(repo_or_path, None, None, None).map_err(|e| {
            AppError::ExternalService(format!("failed to load embedding model: {e}"))
        })?;
        info!("Embedding model loaded");
        Ok(Self { model })
    }
}

impl Embedder for StaticModelEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, AppError> {
        let embedding = self.model.encode_single(text);
        if embedding.is_empty() {
            return Err(AppError::ExternalService(
                "embedding model returned an empty vector".to_string(),
            ));
        }
        Ok(embedding)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scorers
// ────────────────────────────────────────────────────────────────────────────

/// Cosine-similarity scorer over any `Embedder`.
pub struct EmbeddingScorer {
    embedder: Arc<dyn Embedder>,
}

impl EmbeddingScorer {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self { embedder }
    }
}

#[async_trait]
impl SimilarityScorer for EmbeddingScorer {
    async fn similarity(&self, jd_text: &str, resume_text: &str) -> Similarity {
        if jd_text.trim().is_empty() || resume_text.trim().is_empty() {
            return Similarity::degraded("empty text");
        }

        let embedder = Arc::clone(&self.embedder);
        let jd_text = jd_text.to_string();
        let resume_text = resume_text.to_string();

        let cosine = tokio::task::spawn_blocking(move || -> Result<Option<f64>, AppError> {
            let jd = embedder.embed(&jd_text)?;
            let resume = embedder.embed(&resume_text)?;
            Ok(cosine_similarity(&jd, &resume))
        })
        .await;

        match cosine {
            Ok(Ok(Some(cosine))) => to_percent(cosine),
            Ok(Ok(None)) => Similarity::degraded("embeddings are not comparable"),
            Ok(Err(e)) => Similarity::degraded(e.to_string()),
            Err(e) => Similarity::degraded(format!("embedding task failed: {e}")),
        }
    }
}

/// Used when the model failed to load at startup: every score degrades.
pub struct UnavailableScorer {
    reason: String,
}

impl UnavailableScorer {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl SimilarityScorer for UnavailableScorer {
    async fn similarity(&self, _jd_text: &str, _resume_text: &str) -> Similarity {
        Similarity::degraded(self.reason.clone())
    }
}

/// Cosine of the angle between `a` and `b`. `None` for mismatched lengths or
/// zero-norm vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f64> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }

    let (mut dot, mut norm_a, mut norm_b) = (0.0_f64, 0.0_f64, 0.0_f64);
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }
    Some(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

/// Scales a cosine to a 2-decimal percentage clamped to [0, 100].
fn to_percent(cosine: f64) -> Similarity {
    if !cosine.is_finite() {
        return Similarity::degraded("non-finite similarity");
    }
    let percent = (cosine * 100.0 * 100.0).round() / 100.0;
    // Tiny negative cosines round to -0.0, which `clamp` keeps.
    if percent <= 0.0 {
        return Similarity::Scored(0.0);
    }
    Similarity::Scored(percent.min(100.0))
}
