use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::UploadedFile;

/// Reads the text layer of a PDF in-process.
pub struct PdfAdapter {
    timeout: Duration,
}

impl PdfAdapter {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn extract(data: &[u8]) -> Result<String, FileLoaderError> {
        // The PDF library panics on some malformed inputs.
        std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(data))
            .map_err(|_| FileLoaderError::ExtractionFailed("PDF parser panicked".to_string()))?
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, file), fields(filename = %file.original_name))]
    async fn extract_text(&self, file: &UploadedFile) -> Result<String, FileLoaderError> {
        let data = tokio::fs::read(file.path()).await.map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read upload: {e}"))
        })?;

        let text = tokio::time::timeout(
            self.timeout,
            tokio::task::spawn_blocking(move || Self::extract(&data)),
        )
        .await
        .map_err(|_| FileLoaderError::TimedOut(self.timeout.as_secs()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        let text = text.trim().to_string();
        tracing::info!(chars = text.len(), "PDF text extraction complete");

        Ok(text)
    }
}
