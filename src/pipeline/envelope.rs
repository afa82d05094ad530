use crate::domain::{CanonicalPreferences, RecommendationEnvelope};

/// Final pipeline stage: bundles model text with the preferences behind it.
pub struct ResponseEnvelopeBuilder;

impl ResponseEnvelopeBuilder {
    /// The text is opaque; only surrounding whitespace is removed.
    #[must_use]
    pub fn build(raw_text: &str, prefs: CanonicalPreferences) -> RecommendationEnvelope {
        RecommendationEnvelope::new(raw_text.trim().to_string(), prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Genre, Language, Mood, Platform};

    #[test]
    fn test_build_trims_only_outer_whitespace() {
        let prefs = CanonicalPreferences::from_parts(
            Mood::Happy,
            vec![Genre::Comedy],
            Language::English,
            Platform::Netflix,
        );
        let envelope =
            ResponseEnvelopeBuilder::build("\n  1. Movie A\n\n2. Movie B  \n", prefs.clone());

        assert_eq!(envelope.recommendations(), "1. Movie A\n\n2. Movie B");
        assert_eq!(envelope.preferences(), &prefs);
    }
}
