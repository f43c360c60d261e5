use serde::Serialize;

use super::extraction_result::ExtractionResult;
use super::summary::SummaryResult;

/// Terminal value of one request's pipeline. Serializes to the wire shape shared by the
/// synchronous response and the callback body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ProcessingOutcome {
    Succeeded {
        #[serde(rename = "abstract")]
        abstract_text: String,
        bullets: Vec<String>,
        quotes: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        transcript: Option<String>,
    },
    Failed {
        error: String,
    },
}

impl ProcessingOutcome {
    pub fn succeeded(summary: SummaryResult, extraction: ExtractionResult) -> Self {
        Self::Succeeded {
            abstract_text: summary.abstract_text,
            bullets: summary.bullets,
            quotes: summary.quotes,
            transcript: extraction.transcript,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    pub fn status(&self) -> &'static str {
        match self {
            Self::Succeeded { .. } => "succeeded",
            Self::Failed { .. } => "failed",
        }
    }
}
