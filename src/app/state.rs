use crate::adapter::GroqClient;
use crate::config::Settings;
use crate::error::AppError;
use crate::pipeline::{
    PreferenceNormalizer, PromptComposer, RecommendationInvoker, Recommender,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Shared, read-only application state.
#[derive(Clone)]
pub struct AppState {
    recommender: Arc<Recommender>,
}

impl AppState {
    #[must_use]
    pub fn new(recommender: Recommender) -> Self {
        Self {
            recommender: Arc::new(recommender),
        }
    }

    /// Create `AppState` from configuration settings.
    ///
    /// In-flight generator calls stop waiting once `shutdown_token` is cancelled.
    pub fn from_settings(
        settings: &Settings,
        shutdown_token: CancellationToken,
    ) -> Result<Self, AppError> {
        let client = GroqClient::new(&settings.llm).map_err(AppError::Client)?;
        info!(
            endpoint = %client.endpoint(),
            model = client.model(),
            max_attempts = settings.llm.retry.max_attempts,
            timeout_secs = settings.llm.timeout.as_secs(),
            "LLM client initialized"
        );

        let invoker = RecommendationInvoker::new(Arc::new(client))
            .with_retry(settings.llm.retry)
            .with_shutdown(shutdown_token);

        let mood_policy = settings.mood_policy();
        info!(?mood_policy, "Unrecognized mood policy");

        let recommender = Recommender::new(invoker)
            .with_normalizer(PreferenceNormalizer::new(mood_policy))
            .with_composer(PromptComposer::new(settings.recommendation_count))
            .with_timeout(settings.llm.timeout);

        Ok(Self::new(recommender))
    }

    #[must_use]
    pub fn recommender(&self) -> &Recommender {
        &self.recommender
    }
}
