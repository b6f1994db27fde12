use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a status object with service version and which features are enabled.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "advisor-api",
        "features": {
            "analysis": state.analysis_llm.is_some(),
            "skills": state.skills_llm.is_some(),
        }
    }))
}
