//! Resume analysis — one linear call chain per request:
//! build prompt → call the completion API → parse the JSON report.

use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::input::AnalysisRequest;
use crate::analysis::prompts::build_analysis_prompt;
use crate::analysis::report::AnalysisReport;
use crate::errors::AppError;
use crate::llm_client::{LlmClient, LlmError};

/// Runs the analysis for one request.
///
/// A model answer that is not valid JSON comes back as
/// `AppError::MalformedModelOutput`, so callers can offer a retry.
pub async fn analyze_resume(
    llm: &LlmClient,
    request: &AnalysisRequest,
) -> Result<AnalysisReport, AppError> {
    let request_id = Uuid::new_v4();
    let prompt = build_analysis_prompt(&request.job_description, &request.resume_text);

    info!(
        %request_id,
        model = llm.model(),
        temperature = request.temperature,
        max_tokens = request.max_tokens,
        resume_chars = request.resume_text.len(),
        jd_chars = request.job_description.len(),
        "Starting resume analysis"
    );

    let report: AnalysisReport = llm
        .call_json(&prompt, request.sampling())
        .await
        .map_err(|e| {
            warn!(%request_id, "Resume analysis failed: {e}");
            analysis_error(e)
        })?;

    info!(
        %request_id,
        match_score = report.match_score,
        "Resume analysis complete"
    );
    Ok(report)
}

fn analysis_error(err: LlmError) -> AppError {
    match err {
        LlmError::Parse(e) => AppError::MalformedModelOutput(e.to_string()),
        other => AppError::Llm(format!("Resume analysis failed: {other}")),
    }
}
