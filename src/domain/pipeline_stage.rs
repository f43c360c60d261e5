use std::fmt;

use super::callback_target::CallbackTarget;

/// Where a single request's pipeline currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Received,
    Extracting,
    Summarizing,
    Completed,
    Failed,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Received => "received",
            PipelineStage::Extracting => "extracting",
            PipelineStage::Summarizing => "summarizing",
            PipelineStage::Completed => "completed",
            PipelineStage::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineStage::Completed | PipelineStage::Failed)
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the terminal outcome reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseMode {
    /// The HTTP response is held open until the pipeline finishes.
    Synchronous,
    /// The caller gets an immediate acknowledgment; the outcome is POSTed here.
    Callback(CallbackTarget),
}

impl ResponseMode {
    pub fn from_target(target: Option<CallbackTarget>) -> Self {
        match target {
            Some(target) => ResponseMode::Callback(target),
            None => ResponseMode::Synchronous,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseMode::Synchronous => "sync",
            ResponseMode::Callback(_) => "async",
        }
    }
}
