use std::path::Path;

use async_trait::async_trait;

/// Converts a media container into the normalized waveform the transcription engine expects.
#[async_trait]
pub trait AudioTranscoder: Send + Sync {
    /// Returns the bytes of a mono, 16 kHz WAV file.
    async fn to_wav_16k_mono(&self, input: &Path) -> Result<Vec<u8>, TranscodeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    #[error("failed to launch transcoder: {0}")]
    Spawn(String),
    #[error("transcoder exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },
    #[error("transcoder timed out after {0}s")]
    TimedOut(u64),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
