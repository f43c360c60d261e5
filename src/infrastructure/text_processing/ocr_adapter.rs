use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::UploadedFile;
use crate::infrastructure::external_command::{CommandError, run_command};

/// Recognizes text in an image with the tesseract CLI.
pub struct OcrAdapter {
    tesseract_path: PathBuf,
    language: String,
    timeout: Duration,
}

impl OcrAdapter {
    pub fn new(tesseract_path: impl Into<PathBuf>, language: String, timeout: Duration) -> Self {
        Self {
            tesseract_path: tesseract_path.into(),
            language,
            timeout,
        }
    }
}

#[async_trait]
impl FileLoader for OcrAdapter {
    #[tracing::instrument(
        skip(self, file),
        fields(filename = %file.original_name, language = %self.language)
    )]
    async fn extract_text(&self, file: &UploadedFile) -> Result<String, FileLoaderError> {
        let mut cmd = Command::new(&self.tesseract_path);
        cmd.arg(file.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.language);

        let stdout = run_command(&mut cmd, self.timeout)
            .await
            .map_err(|e| match e {
                CommandError::TimedOut { secs, .. } => FileLoaderError::TimedOut(secs),
                other => FileLoaderError::ExtractionFailed(format!("OCR failed: {other}")),
            })?;

        let text = String::from_utf8_lossy(&stdout).into_owned();
        tracing::info!(chars = text.len(), "OCR complete");

        Ok(text)
    }
}
