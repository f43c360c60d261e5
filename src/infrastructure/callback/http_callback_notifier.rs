use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{CallbackError, CallbackNotifier};
use crate::domain::{CallbackTarget, ProcessingOutcome};

/// POSTs outcomes as JSON to the caller's collector.
pub struct HttpCallbackNotifier {
    client: Client,
}

impl HttpCallbackNotifier {
    pub fn new(timeout: Duration) -> Result<Self, CallbackError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CallbackError::RequestFailed(format!("client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl CallbackNotifier for HttpCallbackNotifier {
    async fn notify(
        &self,
        target: &CallbackTarget,
        outcome: &ProcessingOutcome,
    ) -> Result<(), CallbackError> {
        let response = self
            .client
            .post(target.url().clone())
            .json(outcome)
            .send()
            .await
            .map_err(|e| CallbackError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CallbackError::Rejected(status.as_u16()));
        }

        tracing::debug!(status = %status, "Callback accepted");
        Ok(())
    }
}
