use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{AudioTranscoder, FileLoader, FileLoaderError, TranscriptionEngine};
use crate::domain::UploadedFile;

/// Video lane: transcode the soundtrack, then transcribe it.
pub struct VideoAdapter {
    transcoder: Arc<dyn AudioTranscoder>,
    transcription_engine: Arc<dyn TranscriptionEngine>,
}

impl VideoAdapter {
    pub fn new(
        transcoder: Arc<dyn AudioTranscoder>,
        transcription_engine: Arc<dyn TranscriptionEngine>,
    ) -> Self {
        Self {
            transcoder,
            transcription_engine,
        }
    }
}

#[async_trait]
impl FileLoader for VideoAdapter {
    #[tracing::instrument(skip(self, file), fields(filename = %file.original_name))]
    async fn extract_text(&self, file: &UploadedFile) -> Result<String, FileLoaderError> {
        let wav = self.transcoder.to_wav_16k_mono(file.path()).await?;
        let transcript = self.transcription_engine.transcribe(&wav).await?;
        Ok(transcript)
    }
}
