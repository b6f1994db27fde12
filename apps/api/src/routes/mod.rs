pub mod health;


use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::avatar::handlers as avatar;
use crate::skills::handlers as skills;
use crate::state::AppState;
use crate::web::handlers as web;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Browser UI
        .route("/", get(web::index_page))
        .route("/analyze", post(web::analyze_page))
        .route("/skills", post(web::skills_page))
        .route("/report.json", post(web::download_report))
        // JSON API
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        .route("/api/v1/skills", post(skills::handle_skills))
        .route("/api/v1/avatar", get(avatar::handle_avatar))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
