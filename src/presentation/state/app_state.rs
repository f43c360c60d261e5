use std::sync::Arc;

use crate::application::services::{CallbackDispatcher, ProcessingService};
use crate::infrastructure::storage::UploadSpool;

#[derive(Clone)]
pub struct AppState {
    pub processing_service: Arc<ProcessingService>,
    pub callback_dispatcher: Arc<CallbackDispatcher>,
    pub upload_spool: Arc<UploadSpool>,
    pub max_upload_bytes: usize,
}
