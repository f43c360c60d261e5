use crate::application::ports::{LlmClient, LlmClientError};

const MOCK_SUMMARY: &str = "Abstract:\nThe document describes a test upload. It exists to exercise the summarizer.\n\n\
Key points:\n- First key point\n- Second key point\n- Third key point\n\n\
Quotes:\n\"A memorable line.\"\n";

/// Answers every prompt with a well-formed three-section summary.
pub struct MockLlmClient;

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmClientError> {
        Ok(MOCK_SUMMARY.to_string())
    }
}
