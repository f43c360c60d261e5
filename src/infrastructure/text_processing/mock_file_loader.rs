use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::UploadedFile;

/// Returns a fixed text for every upload, regardless of its content.
pub struct MockFileLoader {
    text: String,
}

impl MockFileLoader {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait::async_trait]
impl FileLoader for MockFileLoader {
    async fn extract_text(&self, _file: &UploadedFile) -> Result<String, FileLoaderError> {
        Ok(self.text.clone())
    }
}
