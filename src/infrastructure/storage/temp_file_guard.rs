use std::io;
use std::path::{Path, PathBuf};

/// Owns a temporary file and deletes it exactly once: on `remove`, or on drop.
#[derive(Debug)]
pub struct TempFileGuard {
    path: PathBuf,
    removed: bool,
}

impl TempFileGuard {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            removed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Deletes the file. A file that is already gone counts as deleted.
    pub fn remove(&mut self) {
        if self.removed {
            return;
        }
        self.removed = true;

        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "Temporary file removed"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove temporary file")
            }
        }
    }
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        self.remove();
    }
}
