use async_trait::async_trait;

use crate::domain::{CallbackTarget, ProcessingOutcome};

#[async_trait]
pub trait CallbackNotifier: Send + Sync {
    /// Makes one delivery attempt of `outcome` to `target`.
    async fn notify(
        &self,
        target: &CallbackTarget,
        outcome: &ProcessingOutcome,
    ) -> Result<(), CallbackError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CallbackError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("collector answered {0}")]
    Rejected(u16),
}
