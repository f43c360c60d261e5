use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClientError};
use crate::domain::{
    ExtractionResult, Lane, PipelineStage, ProcessingOutcome, SummaryResult, UploadedFile,
};

use super::summarization_service::SummarizationService;

/// Extracted text shorter than this (after trimming) is treated as unreadable.
pub const MIN_CONTENT_CHARS: usize = 20;

/// Runs one upload through classify → extract → validate → summarize.
pub struct ProcessingService {
    file_loader: Arc<dyn FileLoader>,
    summarizer: SummarizationService,
}

impl ProcessingService {
    pub fn new(file_loader: Arc<dyn FileLoader>, summarizer: SummarizationService) -> Self {
        Self {
            file_loader,
            summarizer,
        }
    }

    /// Runs the pipeline to its terminal state and folds errors into the outcome.
    pub async fn process(&self, file: &UploadedFile) -> ProcessingOutcome {
        match self.run(file).await {
            Ok((summary, extraction)) => {
                log_stage(PipelineStage::Completed, file);
                ProcessingOutcome::succeeded(summary, extraction)
            }
            Err(e) => {
                tracing::warn!(
                    stage = %PipelineStage::Failed,
                    filename = %file.original_name,
                    error = %e,
                    "Processing failed"
                );
                ProcessingOutcome::failed(e.to_string())
            }
        }
    }

    #[tracing::instrument(
        skip(self, file),
        fields(filename = %file.original_name, size_bytes = file.size_bytes, lane)
    )]
    pub async fn run(
        &self,
        file: &UploadedFile,
    ) -> Result<(SummaryResult, ExtractionResult), ProcessingError> {
        let lane = Lane::classify(&file.original_name, file.content_type.as_deref())
            .ok_or_else(|| ProcessingError::UnsupportedType(file.type_label()))?;
        tracing::Span::current().record("lane", lane.as_str());

        log_stage(PipelineStage::Extracting, file);
        let text = self.file_loader.extract_text(file).await?;
        let extraction = ExtractionResult::from_lane(lane, text);

        let chars = extraction.meaningful_chars();
        if chars < MIN_CONTENT_CHARS {
            tracing::info!(chars, min = MIN_CONTENT_CHARS, "Extracted text below threshold");
            return Err(ProcessingError::NoContent);
        }

        log_stage(PipelineStage::Summarizing, file);
        let summary = self.summarizer.summarize(&extraction.text).await?;

        Ok((summary, extraction))
    }
}

fn log_stage(stage: PipelineStage, file: &UploadedFile) {
    if stage.is_terminal() {
        tracing::info!(stage = %stage, filename = %file.original_name, "Pipeline finished");
    } else {
        tracing::debug!(stage = %stage, filename = %file.original_name, "Pipeline stage");
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("No file uploaded")]
    NoFile,
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("Extraction failed: {0}")]
    Extraction(#[from] FileLoaderError),
    #[error(
        "No readable text found in the file. Scanned or low-quality inputs may need OCR or a clearer source."
    )]
    NoContent,
    #[error("Summarization failed: {0}")]
    Summarization(#[from] LlmClientError),
}
