use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Lane, UploadedFile};

/// Routes each upload to the loader registered for its lane.
pub struct CompositeFileLoader {
    adapters: HashMap<Lane, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(Lane, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(&self, file: &UploadedFile) -> Result<String, FileLoaderError> {
        let lane = Lane::classify(&file.original_name, file.content_type.as_deref())
            .ok_or_else(|| FileLoaderError::UnsupportedLane(file.type_label()))?;

        let adapter = self
            .adapters
            .get(&lane)
            .ok_or_else(|| FileLoaderError::UnsupportedLane(lane.to_string()))?;

        adapter.extract_text(file).await
    }
}
