mod audio_transcoder;
mod callback_notifier;
mod file_loader;
mod llm_client;
mod transcription_engine;

pub use audio_transcoder::{AudioTranscoder, TranscodeError};
pub use callback_notifier::{CallbackError, CallbackNotifier};
pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{LlmClient, LlmClientError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
