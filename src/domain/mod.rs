mod callback_target;
mod extraction_result;
mod lane;
mod pipeline_stage;
mod processing_outcome;
mod summary;
mod uploaded_file;

pub use callback_target::{CallbackTarget, InvalidCallbackTarget};
pub use extraction_result::ExtractionResult;
pub use lane::{Lane, extension_of};
pub use pipeline_stage::{PipelineStage, ResponseMode};
pub use processing_outcome::ProcessingOutcome;
pub use summary::{MAX_BULLETS, MAX_QUOTES, SummaryResult};
pub use uploaded_file::UploadedFile;
