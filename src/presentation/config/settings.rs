use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub transcription: TranscriptionSettings,
    pub extraction: ExtractionSettings,
    pub uploads: UploadSettings,
    pub callback: CallbackSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub chat_model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub ffmpeg_path: String,
    pub tesseract_path: String,
    pub ocr_language: String,
    pub command_timeout_secs: u64,
    pub pdf_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub dir: String,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallbackSettings {
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Defaults, then `appsettings.{Environment}`, then `APP__*` variables, then the
    /// conventional `PORT` and `OPENAI_API_KEY`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8787)?
            .set_default("llm.api_key", "")?
            .set_default("llm.base_url", "https://api.openai.com/v1")?
            .set_default("llm.chat_model", "gpt-4o-mini")?
            .set_default("llm.temperature", 0.2)?
            .set_default("llm.timeout_secs", 300)?
            .set_default("transcription.model", "whisper-1")?
            .set_default("extraction.ffmpeg_path", "ffmpeg")?
            .set_default("extraction.tesseract_path", "tesseract")?
            .set_default("extraction.ocr_language", "eng")?
            .set_default("extraction.command_timeout_secs", 600)?
            .set_default("extraction.pdf_timeout_secs", 60)?
            .set_default("uploads.dir", "uploads")?
            .set_default("uploads.max_upload_bytes", 200_i64 * 1024 * 1024)?
            .set_default("callback.timeout_secs", 30)?
            .set_default("logging.level", "info,summarizer_agent=debug,tower_http=debug")?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("llm.api_key", std::env::var("OPENAI_API_KEY").ok())?
            .build()?
            .try_deserialize()
    }
}

impl LlmSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ExtractionSettings {
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }

    pub fn pdf_timeout(&self) -> Duration {
        Duration::from_secs(self.pdf_timeout_secs)
    }
}

impl CallbackSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
