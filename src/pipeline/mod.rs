//! Recommendation pipeline: normalize → compose → invoke → envelope.
//!
//! Every stage except the invoker is pure. Validation runs before any external
//! call, and a failed invocation never yields a partial envelope.

pub mod composer;
pub mod envelope;
pub mod invoker;
pub mod normalizer;

use std::time::Duration;

use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::domain::{RawPreferences, RecommendationEnvelope};
use crate::error::RecommendError;

pub use composer::{PromptComposer, PromptText};
pub use envelope::ResponseEnvelopeBuilder;
pub use invoker::RecommendationInvoker;
pub use normalizer::{MoodPolicy, PreferenceNormalizer};

pub const DEFAULT_INVOKE_TIMEOUT: Duration = Duration::from_secs(60);

/// One configured pipeline, shared read-only by all requests.
#[derive(Clone)]
pub struct Recommender {
    normalizer: PreferenceNormalizer,
    composer: PromptComposer,
    invoker: RecommendationInvoker,
    timeout: Duration,
}

impl Recommender {
    #[must_use]
    pub fn new(invoker: RecommendationInvoker) -> Self {
        Self {
            normalizer: PreferenceNormalizer::default(),
            composer: PromptComposer::default(),
            invoker,
            timeout: DEFAULT_INVOKE_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_normalizer(mut self, normalizer: PreferenceNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    #[must_use]
    pub fn with_composer(mut self, composer: PromptComposer) -> Self {
        self.composer = composer;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn recommend(
        &self,
        raw: &RawPreferences,
    ) -> Result<RecommendationEnvelope, RecommendError> {
        let request_id = Uuid::new_v4();
        let span = info_span!("recommend", %request_id);
        self.run(raw).instrument(span).await
    }

    async fn run(&self, raw: &RawPreferences) -> Result<RecommendationEnvelope, RecommendError> {
        let prefs = self.normalizer.normalize(raw).inspect_err(|e| {
            warn!(kind = e.kind(), error = %e, "rejected preferences");
        })?;

        let prompt = self.composer.compose(&prefs);
        info!(
            mood = %prefs.mood(),
            genres = prefs.genres().len(),
            language = %prefs.language(),
            platform = %prefs.platform(),
            prompt_chars = prompt.as_str().len(),
            "requesting recommendations"
        );

        let text = self.invoker.invoke(&prompt, self.timeout).await?;
        let envelope = ResponseEnvelopeBuilder::build(&text, prefs);
        info!(
            chars = envelope.recommendations().len(),
            "recommendations generated"
        );
        Ok(envelope)
    }
}
