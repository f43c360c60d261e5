use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::SummaryResult;

use super::summary_parser::parse_summary;

/// Upper bound on the characters of extracted text sent to the model.
pub const MAX_SUMMARY_INPUT_CHARS: usize = 200_000;

pub struct SummarizationService {
    llm_client: Arc<dyn LlmClient>,
}

impl SummarizationService {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    #[tracing::instrument(skip(self, text), fields(input_chars))]
    pub async fn summarize(&self, text: &str) -> Result<SummaryResult, LlmClientError> {
        let clipped = clip_chars(text, MAX_SUMMARY_INPUT_CHARS);
        tracing::Span::current().record("input_chars", clipped.chars().count());

        let completion = self.llm_client.complete(&build_prompt(clipped)).await?;
        let summary = parse_summary(&completion);

        tracing::debug!(
            completion_chars = completion.len(),
            bullets = summary.bullets.len(),
            quotes = summary.quotes.len(),
            "Parsed model summary"
        );

        Ok(summary)
    }
}

pub fn build_prompt(text: &str) -> String {
    format!(
        "You are a precise summarizer. Produce:\n\n\
         1) Abstract (3–5 sentences)\n\n\
         2) 7–12 key bullets (<=16 words each)\n\n\
         3) 2–3 memorable quotes (verbatim if present)\n\n\
         Text:\n{text}"
    )
}

/// Returns at most `max_chars` characters of `text`, cut on a char boundary.
pub fn clip_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
