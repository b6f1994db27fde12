use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Feature disabled: {0}")]
    FeatureDisabled(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Malformed model output: {0}")]
    MalformedModelOutput(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Whether repeating the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::MalformedModelOutput(_) | AppError::Llm(_))
    }

    /// Message safe to show to the person using the page.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg)
            | AppError::UnprocessableEntity(msg)
            | AppError::FeatureDisabled(msg) => msg.clone(),
            AppError::Llm(_) => "The AI service could not complete the request.".to_string(),
            AppError::MalformedModelOutput(_) => {
                "The AI returned a report that could not be read. Please try again.".to_string()
            }
            AppError::Template(_) | AppError::Internal(_) => {
                "An internal server error occurred".to_string()
            }
        }
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::UnprocessableEntity(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "UNPROCESSABLE_ENTITY")
            }
            AppError::FeatureDisabled(_) => (StatusCode::SERVICE_UNAVAILABLE, "FEATURE_DISABLED"),
            AppError::Llm(_) => (StatusCode::BAD_GATEWAY, "LLM_ERROR"),
            AppError::MalformedModelOutput(_) => {
                (StatusCode::BAD_GATEWAY, "MALFORMED_MODEL_OUTPUT")
            }
            AppError::Template(_) => (StatusCode::INTERNAL_SERVER_ERROR, "TEMPLATE_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    /// Logs server-side failures. Client mistakes are not logged.
    pub fn log(&self) {
        match self {
            AppError::Llm(msg) => tracing::error!("LLM error: {msg}"),
            AppError::MalformedModelOutput(msg) => {
                tracing::warn!("Malformed model output: {msg}")
            }
            AppError::Template(e) => tracing::error!("Template error: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            _ => {}
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let (status, code) = self.status_and_code();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.user_message(),
                "retryable": self.is_retryable(),
            }
        }));

        (status, body).into_response()
    }
}
