pub mod audio;
pub mod callback;
pub mod external_command;
pub mod llm;
pub mod observability;
pub mod storage;
pub mod text_processing;
