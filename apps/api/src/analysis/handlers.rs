//! Axum route handlers for the Analysis JSON API.

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::analysis::analyzer::analyze_resume;
use crate::analysis::input::{collect_analysis_request, read_analysis_form};
use crate::analysis::report::AnalysisReport;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/analyze
///
/// Multipart fields: `resume` (PDF) or `resume_text`, `job_description`, optional
/// `temperature` and `max_tokens`. Returns the JSON object the model emitted,
/// unchanged; defaults are a display concern.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let llm = state.analysis_client()?;
    let form = read_analysis_form(&mut multipart).await?;
    let request = collect_analysis_request(form, state.loader.as_ref()).await?;
    let report = analyze_resume(llm, &request).await?;
    Ok(Json(report))
}
