mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    CallbackSettings, ExtractionSettings, LlmSettings, LoggingSettings, ServerSettings, Settings,
    TranscriptionSettings, UploadSettings,
};
