use axum::{
    extract::{Multipart, State},
    http::header,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use tracing::info;

use crate::analysis::analyzer::analyze_resume;
use crate::analysis::input::{
    collect_analysis_request, read_analysis_form, AnalysisForm, AnalysisRequest,
};
use crate::analysis::render::{report_to_json, ReportView, REPORT_FILE_NAME};
use crate::analysis::report::AnalysisReport;
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::skills::get_job_skills;
use crate::state::AppState;
use crate::web::IndexPage;

#[derive(Debug, Deserialize)]
pub struct SkillsForm {
    #[serde(default)]
    pub job_title: String,
}

#[derive(Debug, Deserialize)]
pub struct DownloadForm {
    pub report: String,
}

/// GET /
pub async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    IndexPage::new(&state).into_html()
}

/// POST /analyze
///
/// Same pipeline as the JSON API; the outcome is rendered into the page.
pub async fn analyze_page(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let mut page = IndexPage::new(&state);

    let form = match read_analysis_form(&mut multipart).await {
        Ok(form) => form,
        Err(err) => {
            page.set_analysis_error(err);
            return page.into_html();
        }
    };
    page.job_description = form.job_description.clone();
    page.temperature = form.temperature;
    page.max_tokens = form.max_tokens;

    let (llm, request) = match prepare_analysis(&state, form).await {
        Ok(prepared) => prepared,
        Err(err) => {
            page.set_analysis_error(err);
            return page.into_html();
        }
    };

    match analyze_resume(llm, &request).await {
        Ok(report) => page.report = Some(ReportView::from_report(&report)),
        Err(err) => page.set_analysis_failure(err, request),
    }
    page.into_html()
}

async fn prepare_analysis(
    state: &AppState,
    form: AnalysisForm,
) -> Result<(&LlmClient, AnalysisRequest), AppError> {
    let llm = state.analysis_client()?;
    let request = collect_analysis_request(form, state.loader.as_ref()).await?;
    Ok((llm, request))
}

/// POST /skills
///
/// A blank job title renders the page without calling the model.
pub async fn skills_page(
    State(state): State<AppState>,
    Form(form): Form<SkillsForm>,
) -> Result<Html<String>, AppError> {
    let mut page = IndexPage::new(&state);
    page.job_title = form.job_title.clone();

    if form.job_title.trim().is_empty() {
        return page.into_html();
    }

    let answer = match state.skills_client() {
        Ok(llm) => get_job_skills(llm, &form.job_title).await,
        Err(err) => Err(err),
    };
    match answer {
        Ok(text) => page.skills_answer = Some(text),
        Err(err) => page.set_skills_error(err),
    }
    page.into_html()
}

/// POST /report.json
///
/// Turns the report carried by the page back into a `report.json` download.
pub async fn download_report(Form(form): Form<DownloadForm>) -> Result<Response, AppError> {
    let report: AnalysisReport = serde_json::from_str(&form.report)
        .map_err(|e| AppError::Validation(format!("report is not valid JSON: {e}")))?;

    info!("Serving report download");
    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILE_NAME}\""),
            ),
        ],
        report_to_json(&report, false),
    )
        .into_response())
}
