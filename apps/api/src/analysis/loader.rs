//! Document loading — turns an uploaded resume file into plain text.
//!
//! `AppState` holds an `Arc<dyn DocumentLoader>`, so extraction can be swapped
//! (or stubbed in tests) without touching handlers.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;

#[async_trait]
pub trait DocumentLoader: Send + Sync {
    /// Extracts the text content of the file at `path`.
    async fn load(&self, path: &Path) -> Result<String, AppError>;
}

/// PDF text extraction backed by `pdf-extract`.
/// Extraction is CPU-bound and runs on the blocking pool.
pub struct PdfLoader;

#[async_trait]
impl DocumentLoader for PdfLoader {
    async fn load(&self, path: &Path) -> Result<String, AppError> {
        let path: PathBuf = path.to_path_buf();
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text(&path))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}")))?
            .map_err(|e| {
                AppError::UnprocessableEntity(format!("Could not read text from the PDF: {e}"))
            })?;

        debug!(chars = text.len(), "Extracted resume text");
        Ok(text)
    }
}
