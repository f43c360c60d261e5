use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends a single user prompt and returns the model's text completion.
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("{0}")]
    ApiError(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
