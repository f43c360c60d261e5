use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioTranscoder, TranscodeError};
use crate::infrastructure::external_command::{CommandError, run_command};

const TARGET_SAMPLE_RATE: u32 = 16_000;

/// Transcodes media to mono 16 kHz WAV by shelling out to ffmpeg.
pub struct FfmpegTranscoder {
    ffmpeg_path: PathBuf,
    timeout: Duration,
}

impl FfmpegTranscoder {
    pub fn new(ffmpeg_path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            ffmpeg_path: ffmpeg_path.into(),
            timeout,
        }
    }
}

#[async_trait]
impl AudioTranscoder for FfmpegTranscoder {
    #[tracing::instrument(skip(self), fields(input = %input.display()))]
    async fn to_wav_16k_mono(&self, input: &Path) -> Result<Vec<u8>, TranscodeError> {
        // Removed when dropped, on every exit path.
        let wav = tempfile::Builder::new()
            .prefix("transcode-")
            .suffix(".wav")
            .tempfile()?;

        let mut cmd = Command::new(&self.ffmpeg_path);
        cmd.arg("-y")
            .arg("-hide_banner")
            .arg("-i")
            .arg(input)
            .arg("-vn")
            .arg("-ac")
            .arg("1")
            .arg("-ar")
            .arg(TARGET_SAMPLE_RATE.to_string())
            .arg("-f")
            .arg("wav")
            .arg(wav.path());

        run_command(&mut cmd, self.timeout)
            .await
            .map_err(|e| match e {
                CommandError::Spawn { source, .. } => TranscodeError::Spawn(source.to_string()),
                CommandError::TimedOut { secs, .. } => TranscodeError::TimedOut(secs),
                CommandError::Failed { status, stderr, .. } => {
                    TranscodeError::Failed { status, stderr }
                }
            })?;

        let bytes = tokio::fs::read(wav.path()).await?;

        tracing::debug!(wav_bytes = bytes.len(), "Transcoded to 16kHz mono WAV");

        Ok(bytes)
    }
}
