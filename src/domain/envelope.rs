use serde::Serialize;

use super::preferences::CanonicalPreferences;

/// Generated text plus the preferences that produced it. One per request.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RecommendationEnvelope {
    recommendations: String,
    preferences: CanonicalPreferences,
}

impl RecommendationEnvelope {
    pub(crate) fn new(recommendations: String, preferences: CanonicalPreferences) -> Self {
        Self {
            recommendations,
            preferences,
        }
    }

    #[must_use]
    pub fn recommendations(&self) -> &str {
        &self.recommendations
    }

    #[must_use]
    pub fn preferences(&self) -> &CanonicalPreferences {
        &self.preferences
    }
}
