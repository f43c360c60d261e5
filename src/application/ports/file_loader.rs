use async_trait::async_trait;

use crate::domain::UploadedFile;

/// Turns a spooled upload into plain text for one extraction lane.
#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(&self, file: &UploadedFile) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("no extractor registered for lane: {0}")]
    UnsupportedLane(String),
    #[error("{0}")]
    ExtractionFailed(String),
    #[error("transcoding: {0}")]
    Transcoding(#[from] super::TranscodeError),
    #[error("transcription: {0}")]
    Transcription(#[from] super::TranscriptionError),
    #[error("timed out after {0}s")]
    TimedOut(u64),
}
