use std::sync::Arc;

use crate::analysis::loader::DocumentLoader;
use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::LlmClient;

pub const ANALYSIS_DISABLED_MESSAGE: &str =
    "Resume analysis is unavailable: ANALYSIS_API_KEY is not configured.";
pub const SKILLS_DISABLED_MESSAGE: &str =
    "Skill search is unavailable: SKILLS_API_KEY is not configured.";

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; nothing is shared between requests except these clients.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// `None` when the analysis credential is missing; the feature is then disabled.
    pub analysis_llm: Option<LlmClient>,
    pub skills_llm: Option<LlmClient>,
    /// Pluggable resume text extraction. Default: PdfLoader.
    pub loader: Arc<dyn DocumentLoader>,
}

impl AppState {
    pub fn analysis_client(&self) -> Result<&LlmClient, AppError> {
        self.analysis_llm
            .as_ref()
            .ok_or_else(|| AppError::FeatureDisabled(ANALYSIS_DISABLED_MESSAGE.to_string()))
    }

    pub fn skills_client(&self) -> Result<&LlmClient, AppError> {
        self.skills_llm
            .as_ref()
            .ok_or_else(|| AppError::FeatureDisabled(SKILLS_DISABLED_MESSAGE.to_string()))
    }
}
