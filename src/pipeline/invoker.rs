use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

use crate::error::ServiceError;
use crate::port::{GenerationError, TextGenerator};
use crate::reliability::RetryPolicy;

use super::composer::PromptText;

/// Sends a prompt to the text generator under a single timeout.
///
/// The timeout covers every attempt and every backoff sleep. When it fires the
/// pending generator future is dropped, which cancels an in-flight HTTP call.
#[derive(Clone)]
pub struct RecommendationInvoker {
    generator: Arc<dyn TextGenerator>,
    retry: RetryPolicy,
    shutdown: Option<CancellationToken>,
}

impl RecommendationInvoker {
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            retry: RetryPolicy::no_retry(),
            shutdown: None,
        }
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Abort waiting on the generator once `token` is cancelled.
    #[must_use]
    pub fn with_shutdown(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    pub async fn invoke(
        &self,
        prompt: &PromptText,
        timeout: Duration,
    ) -> Result<String, ServiceError> {
        let attempts = AtomicU32::new(0);
        let bounded = tokio::time::timeout(timeout, self.attempt_all(prompt, &attempts));

        let outcome = match &self.shutdown {
            Some(token) => tokio::select! {
                outcome = bounded => outcome,
                () = token.cancelled() => {
                    let attempts = attempts.load(Ordering::Relaxed);
                    warn!(attempts, "generation abandoned: shutting down");
                    return Err(ServiceError::Unavailable {
                        attempts,
                        message: "service is shutting down".into(),
                    });
                }
            },
            None => bounded.await,
        };

        outcome.unwrap_or_else(|_elapsed| {
            warn!(
                attempts = attempts.load(Ordering::Relaxed),
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                "generation timed out"
            );
            Err(ServiceError::Timeout(timeout))
        })
    }

    async fn attempt_all(
        &self,
        prompt: &PromptText,
        attempts: &AtomicU32,
    ) -> Result<String, ServiceError> {
        loop {
            let attempt = attempts.fetch_add(1, Ordering::Relaxed) + 1;
            match self.generator.generate(prompt.as_str()).await {
                Ok(text) if text.trim().is_empty() => {
                    warn!(attempt, "generator returned empty text");
                    return Err(ServiceError::EmptyResponse);
                }
                Ok(text) => {
                    debug!(attempt, chars = text.len(), "generation succeeded");
                    return Ok(text);
                }
                Err(GenerationError::Malformed(reason)) => {
                    warn!(attempt, %reason, "generator response carried no text");
                    return Err(ServiceError::EmptyResponse);
                }
                Err(e) if e.is_transient() && self.retry.allows_another(attempt) => {
                    let delay = self.retry.delay_for(attempt);
                    warn!(attempt, ?delay, error = %e, "transient generation failure, retrying");
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    error!(attempt, error = %e, "generation failed");
                    return Err(ServiceError::Unavailable {
                        attempts: attempt,
                        message: e.to_string(),
                    });
                }
            }
        }
    }
}
