use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError};

const DEFAULT_FAILURE_MESSAGE: &str = "LLM summarize failed";

/// Chat-completions client for OpenAI-compatible APIs.
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
}

impl OpenAiClient {
    pub fn new(
        api_key: String,
        base_url: &str,
        model: String,
        temperature: f32,
        timeout: Duration,
    ) -> Result<Self, LlmClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmClientError::ApiRequestFailed(format!("client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            temperature,
        })
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatRequestMessage<'a>; 1],
    temperature: f32,
}

#[derive(Serialize)]
struct ChatRequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

#[async_trait]
impl LlmClient for OpenAiClient {
    #[tracing::instrument(skip(self, prompt), fields(model = %self.model, prompt_chars = prompt.len()))]
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = ChatRequest {
            model: &self.model,
            messages: [ChatRequestMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        let status = response.status();
        let raw_bytes = response
            .bytes()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(format!("read body: {e}")))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ApiErrorBody>(&raw_bytes)
                .ok()
                .and_then(|b| b.error)
                .and_then(|e| e.message)
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
            tracing::warn!(status = %status, message = %message, "Chat completion rejected");
            return Err(LlmClientError::ApiError(message));
        }

        let completion: ChatCompletion = serde_json::from_slice(&raw_bytes).map_err(|e| {
            tracing::error!(
                raw_response = %String::from_utf8_lossy(&raw_bytes),
                "Failed to parse chat completion JSON"
            );
            LlmClientError::InvalidResponse(e.to_string())
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        tracing::info!(completion_chars = content.len(), "Chat completion received");

        Ok(content)
    }
}
