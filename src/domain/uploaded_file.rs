use std::path::{Path, PathBuf};

use super::lane::extension_of;

/// The single file carried by a `/process` request, spooled to temporary storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub original_name: String,
    pub content_type: Option<String>,
    pub path: PathBuf,
    pub size_bytes: u64,
}

impl UploadedFile {
    pub fn new(
        original_name: impl Into<String>,
        content_type: Option<String>,
        path: PathBuf,
        size_bytes: u64,
    ) -> Self {
        Self {
            original_name: original_name.into(),
            content_type,
            path,
            size_bytes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn extension(&self) -> Option<String> {
        extension_of(&self.original_name)
    }

    /// What the classifier saw, used in error messages: the extension, else the
    /// declared content type.
    pub fn type_label(&self) -> String {
        self.extension()
            .or_else(|| {
                self.content_type
                    .as_deref()
                    .map(str::trim)
                    .filter(|ct| !ct.is_empty())
                    .map(String::from)
            })
            .unwrap_or_else(|| "unknown".to_string())
    }
}
