use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::skills::get_job_skills;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SkillsRequest {
    pub job_title: String,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub job_title: String,
    pub skills: String,
}

/// POST /api/v1/skills
pub async fn handle_skills(
    State(state): State<AppState>,
    Json(request): Json<SkillsRequest>,
) -> Result<Json<SkillsResponse>, AppError> {
    let llm = state.skills_client()?;
    let skills = get_job_skills(llm, &request.job_title).await?;
    Ok(Json(SkillsResponse {
        job_title: request.job_title,
        skills,
    }))
}
