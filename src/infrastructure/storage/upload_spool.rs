use std::io;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::domain::UploadedFile;

use super::temp_file_guard::TempFileGuard;

/// Writes incoming uploads to a spool directory.
pub struct UploadSpool {
    dir: PathBuf,
}

impl UploadSpool {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, UploadSpoolError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Streams `chunks` into a fresh file. A partially written file is deleted on error.
    pub async fn spool(
        &self,
        original_name: &str,
        content_type: Option<String>,
        mut chunks: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<SpooledUpload, UploadSpoolError> {
        let path = self.dir.join(Uuid::new_v4().to_string());
        let guard = TempFileGuard::new(path.clone());

        let mut out = tokio::fs::File::create(&path).await?;
        let mut size_bytes: u64 = 0;

        while let Some(chunk) = chunks.next().await {
            let chunk = chunk.map_err(UploadSpoolError::Read)?;
            size_bytes += chunk.len() as u64;
            out.write_all(&chunk).await?;
        }
        out.flush().await?;

        tracing::debug!(
            filename = %original_name,
            size_bytes,
            path = %path.display(),
            "Upload spooled"
        );

        Ok(SpooledUpload {
            file: UploadedFile::new(original_name, content_type, path, size_bytes),
            guard,
        })
    }
}

/// An upload on disk, tied to the guard that deletes it.
#[derive(Debug)]
pub struct SpooledUpload {
    file: UploadedFile,
    guard: TempFileGuard,
}

impl SpooledUpload {
    pub fn file(&self) -> &UploadedFile {
        &self.file
    }

    /// Deletes the spooled file now instead of waiting for drop.
    pub fn cleanup(mut self) {
        self.guard.remove();
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadSpoolError {
    #[error("failed to read upload: {0}")]
    Read(io::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
