pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers as intake;
use crate::generation::handlers as generation;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate_jd", post(generation::handle_generate_jd))
        .route("/upload_jd", post(intake::handle_upload_jd))
        .route(
            "/evaluate_candidates",
            post(matching::handle_evaluate_candidates),
        )
        .layer(body_limit)
        .with_state(state)
}
