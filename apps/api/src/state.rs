use std::sync::Arc;

use crate::config::Config;
use crate::generation::jd_generator::JdGenerator;
use crate::matching::similarity::SimilarityScorer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; nothing in it is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable similarity backend. Default: model2vec embeddings.
    pub scorer: Arc<dyn SimilarityScorer>,
    pub jd_generator: JdGenerator,
}
