//! Browser UI — server-rendered pages for the analysis, skill query and avatar features.
//!
//! Errors never escape as raw faults here: every `AppError` is shown inline on the page.

pub mod handlers;

use askama::Template;
use axum::response::Html;

use crate::analysis::input::{AnalysisRequest, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use crate::analysis::render::ReportView;
use crate::avatar::sidebar_expression;
use crate::errors::AppError;
use crate::state::{AppState, ANALYSIS_DISABLED_MESSAGE, SKILLS_DISABLED_MESSAGE};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub version: &'static str,
    pub avatar: String,
    pub analysis_enabled: bool,
    pub analysis_disabled_message: &'static str,
    pub skills_enabled: bool,
    pub skills_disabled_message: &'static str,
    pub temperature: f32,
    pub max_tokens: u32,
    pub job_description: String,
    pub job_title: String,
    pub analysis_error: Option<String>,
    /// Extracted resume text carried by the "Try again" form.
    pub retry_resume_text: Option<String>,
    pub report: Option<ReportView>,
    pub skills_error: Option<String>,
    pub skills_answer: Option<String>,
}

impl IndexPage {
    pub fn new(state: &AppState) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            avatar: sidebar_expression(),
            analysis_enabled: state.analysis_llm.is_some(),
            analysis_disabled_message: ANALYSIS_DISABLED_MESSAGE,
            skills_enabled: state.skills_llm.is_some(),
            skills_disabled_message: SKILLS_DISABLED_MESSAGE,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            job_description: String::new(),
            job_title: String::new(),
            analysis_error: None,
            retry_resume_text: None,
            report: None,
            skills_error: None,
            skills_answer: None,
        }
    }

    pub fn set_analysis_error(&mut self, err: AppError) {
        err.log();
        self.analysis_error = Some(err.user_message());
    }

    /// Shows the error and, when it is retryable, a form that re-runs the same request.
    pub fn set_analysis_failure(&mut self, err: AppError, request: AnalysisRequest) {
        if err.is_retryable() {
            self.retry_resume_text = Some(request.resume_text);
        }
        self.set_analysis_error(err);
    }

    pub fn set_skills_error(&mut self, err: AppError) {
        err.log();
        self.skills_error = Some(err.user_message());
    }

    pub fn into_html(self) -> Result<Html<String>, AppError> {
        Ok(Html(self.render()?))
    }
}
