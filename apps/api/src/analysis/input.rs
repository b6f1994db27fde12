//! Input Collector — reads the analysis form and turns it into an `AnalysisRequest`.
//!
//! The uploaded resume is written to a scoped temporary file for the loader.
//! The file is removed when it goes out of scope, on every exit path.
//!
//! A retry from the page sends the already-extracted text as `resume_text`
//! instead of the file, since browsers do not re-send a file input.

use std::io::Write;

use axum::extract::Multipart;
use bytes::Bytes;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::analysis::loader::DocumentLoader;
use crate::errors::AppError;
use crate::llm_client::SamplingParams;

pub const DEFAULT_TEMPERATURE: f32 = 0.5;
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const MIN_MAX_TOKENS: u32 = 100;
pub const MAX_MAX_TOKENS: u32 = 2000;

pub const MISSING_INPUTS_MESSAGE: &str = "Please upload a resume and provide a job description.";

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Raw fields of one analysis submission, before the resume is read.
#[derive(Debug, Clone)]
pub struct AnalysisForm {
    pub resume: Option<UploadedFile>,
    /// Previously extracted resume text. Used only when no file was uploaded.
    pub resume_text: Option<String>,
    pub job_description: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for AnalysisForm {
    fn default() -> Self {
        Self {
            resume: None,
            resume_text: None,
            job_description: String::new(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Everything the analyzer needs for one call. Built per request, never mutated.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub resume_text: String,
    pub job_description: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl AnalysisRequest {
    pub fn sampling(&self) -> SamplingParams {
        SamplingParams {
            temperature: self.temperature,
            max_tokens: Some(self.max_tokens),
        }
    }
}

/// Reads the `resume`, `resume_text`, `job_description`, `temperature` and
/// `max_tokens` fields.
/// Unknown fields are ignored. Blank numeric fields fall back to defaults.
pub async fn read_analysis_form(multipart: &mut Multipart) -> Result<AnalysisForm, AppError> {
    let mut form = AnalysisForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid form data: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| AppError::Validation("Invalid file".to_string()))?;
                // Browsers send an empty part when no file was picked.
                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }
                if !has_pdf_extension(&file_name) {
                    return Err(AppError::Validation(
                        "Only PDF files are allowed".to_string(),
                    ));
                }
                form.resume = Some(UploadedFile { file_name, bytes });
            }
            "resume_text" => {
                let text = text_field(field).await?;
                form.resume_text = (!text.trim().is_empty()).then_some(text);
            }
            "job_description" => form.job_description = text_field(field).await?,
            "temperature" => {
                let raw = text_field(field).await?;
                form.temperature = parse_or_default(&raw, DEFAULT_TEMPERATURE, "temperature")?;
            }
            "max_tokens" => {
                let raw = text_field(field).await?;
                form.max_tokens = parse_or_default(&raw, DEFAULT_MAX_TOKENS, "max_tokens")?;
            }
            other => debug!(field = other, "Ignoring unknown form field"),
        }
    }

    Ok(form)
}

/// Validates the form and extracts the resume text through `loader`.
///
/// Missing inputs are rejected before any file is written or any model is called.
/// An uploaded file takes precedence over `resume_text`.
pub async fn collect_analysis_request(
    form: AnalysisForm,
    loader: &dyn DocumentLoader,
) -> Result<AnalysisRequest, AppError> {
    if form.job_description.trim().is_empty()
        || (form.resume.is_none() && form.resume_text.is_none())
    {
        return Err(AppError::Validation(MISSING_INPUTS_MESSAGE.to_string()));
    }
    validate_sampling(form.temperature, form.max_tokens)?;

    let resume_text = match (form.resume, form.resume_text) {
        (Some(resume), _) => extract_resume_text(resume, loader).await?,
        (None, Some(text)) => text,
        (None, None) => return Err(AppError::Validation(MISSING_INPUTS_MESSAGE.to_string())),
    };

    Ok(AnalysisRequest {
        resume_text,
        job_description: form.job_description,
        temperature: form.temperature,
        max_tokens: form.max_tokens,
    })
}

pub fn validate_sampling(temperature: f32, max_tokens: u32) -> Result<(), AppError> {
    if !(0.0..=1.0).contains(&temperature) {
        return Err(AppError::Validation(
            "temperature must be between 0.0 and 1.0".to_string(),
        ));
    }
    if !(MIN_MAX_TOKENS..=MAX_MAX_TOKENS).contains(&max_tokens) {
        return Err(AppError::Validation(format!(
            "max_tokens must be between {MIN_MAX_TOKENS} and {MAX_MAX_TOKENS}"
        )));
    }
    Ok(())
}

async fn extract_resume_text(
    resume: UploadedFile,
    loader: &dyn DocumentLoader,
) -> Result<String, AppError> {
    let UploadedFile { file_name, bytes } = resume;
    let size = bytes.len();
    let temp_file = tokio::task::spawn_blocking(move || stage_resume(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Resume staging task failed: {e}")))??;

    debug!(%file_name, bytes = size, "Resume staged for extraction");

    // `temp_file` is dropped (and deleted) when this function returns, whatever the outcome.
    loader.load(temp_file.path()).await
}

fn stage_resume(bytes: &[u8]) -> Result<NamedTempFile, AppError> {
    let mut temp_file = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(".pdf")
        .tempfile()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to create temp file: {e}")))?;
    temp_file
        .write_all(bytes)
        .and_then(|()| temp_file.flush())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to write temp file: {e}")))?;
    Ok(temp_file)
}

fn has_pdf_extension(file_name: &str) -> bool {
    file_name.to_ascii_lowercase().ends_with(".pdf")
}

async fn text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid form field: {e}")))
}

fn parse_or_default<T: std::str::FromStr>(raw: &str, default: T, name: &str) -> Result<T, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }
    raw.parse::<T>()
        .map_err(|_| AppError::Validation(format!("{name} must be a number, got '{raw}'")))
}
