use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use summarizer_agent::application::ports::{
    AudioTranscoder, FileLoader, FileLoaderError, TranscodeError, TranscriptionEngine,
    TranscriptionError,
};
use summarizer_agent::infrastructure::text_processing::VideoAdapter;

use crate::helpers::write_upload;

struct FixedTranscoder(Result<Vec<u8>, u64>);

#[async_trait]
impl AudioTranscoder for FixedTranscoder {
    async fn to_wav_16k_mono(&self, _input: &Path) -> Result<Vec<u8>, TranscodeError> {
        self.0.clone().map_err(TranscodeError::TimedOut)
    }
}

#[derive(Default)]
struct RecordingEngine {
    received: Mutex<Vec<Vec<u8>>>,
}

#[async_trait]
impl TranscriptionEngine for RecordingEngine {
    async fn transcribe(&self, wav_data: &[u8]) -> Result<String, TranscriptionError> {
        self.received.lock().await.push(wav_data.to_vec());
        Ok("spoken words".to_string())
    }
}

#[tokio::test]
async fn given_video_when_extracting_then_transcribes_transcoded_audio() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_upload(dir.path(), "talk.mp4", Some("video/mp4"), b"mp4");
    let engine = Arc::new(RecordingEngine::default());
    let adapter = VideoAdapter::new(
        Arc::new(FixedTranscoder(Ok(b"RIFF-wav".to_vec()))),
        engine.clone(),
    );

    let text = adapter.extract_text(&file).await.unwrap();

    assert_eq!(text, "spoken words");
    assert_eq!(engine.received.lock().await.as_slice(), &[b"RIFF-wav".to_vec()]);
}

#[tokio::test]
async fn given_transcoder_timeout_when_extracting_then_skips_transcription() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_upload(dir.path(), "talk.mp4", None, b"mp4");
    let engine = Arc::new(RecordingEngine::default());
    let adapter = VideoAdapter::new(Arc::new(FixedTranscoder(Err(600))), engine.clone());

    let err = adapter.extract_text(&file).await.unwrap_err();

    assert!(matches!(
        err,
        FileLoaderError::Transcoding(TranscodeError::TimedOut(600))
    ));
    assert!(engine.received.lock().await.is_empty());
}
