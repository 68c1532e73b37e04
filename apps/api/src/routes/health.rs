use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Returns a static liveness payload.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "Recruitment AI Agent"
    }))
}
