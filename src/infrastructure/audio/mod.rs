mod ffmpeg_transcoder;
mod openai_whisper_engine;

pub use ffmpeg_transcoder::FfmpegTranscoder;
pub use openai_whisper_engine::OpenAiWhisperEngine;
