mod callback_dispatcher;
mod processing_service;
mod summarization_service;
mod summary_parser;

pub use callback_dispatcher::{CallbackDelivery, CallbackDispatcher};
pub use processing_service::{MIN_CONTENT_CHARS, ProcessingError, ProcessingService};
pub use summarization_service::{
    MAX_SUMMARY_INPUT_CHARS, SummarizationService, build_prompt, clip_chars,
};
pub use summary_parser::parse_summary;
