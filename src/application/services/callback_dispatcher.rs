use std::sync::Arc;

use crate::application::ports::CallbackNotifier;
use crate::domain::{CallbackTarget, ProcessingOutcome};

/// What happened to a terminal outcome on its way to the callback target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackDelivery {
    Delivered,
    /// The outcome itself was not accepted, but a failure payload was.
    FailureReported,
    Dropped,
}

/// Delivers terminal outcomes for asynchronous requests. One attempt, plus one attempt
/// to report the delivery failure; nothing is queued or retried beyond that.
pub struct CallbackDispatcher {
    notifier: Arc<dyn CallbackNotifier>,
}

impl CallbackDispatcher {
    pub fn new(notifier: Arc<dyn CallbackNotifier>) -> Self {
        Self { notifier }
    }

    #[tracing::instrument(skip(self, outcome), fields(target = %target, status = outcome.status()))]
    pub async fn deliver(
        &self,
        target: &CallbackTarget,
        outcome: &ProcessingOutcome,
    ) -> CallbackDelivery {
        let first_error = match self.notifier.notify(target, outcome).await {
            Ok(()) => {
                tracing::info!("Callback delivered");
                return CallbackDelivery::Delivered;
            }
            Err(e) => e,
        };

        tracing::warn!(error = %first_error, "Callback delivery failed, reporting failure");

        let failure =
            ProcessingOutcome::failed(format!("Callback delivery failed: {}", first_error));
        match self.notifier.notify(target, &failure).await {
            Ok(()) => CallbackDelivery::FailureReported,
            Err(e) => {
                tracing::error!(error = %e, "Failure report undeliverable, dropping outcome");
                CallbackDelivery::Dropped
            }
        }
    }
}
