use tracing::debug;

use crate::domain::{CanonicalPreferences, Genre, Language, Mood, Platform, RawPreferences};
use crate::error::ValidationError;

/// What to do with a mood outside the fixed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoodPolicy {
    /// Fail with [`ValidationError::UnrecognizedMood`].
    #[default]
    Reject,
    /// Substitute the given mood.
    ClampTo(Mood),
}

/// Validates untrusted preference fields into [`CanonicalPreferences`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferenceNormalizer {
    mood_policy: MoodPolicy,
}

impl PreferenceNormalizer {
    #[must_use]
    pub fn new(mood_policy: MoodPolicy) -> Self {
        Self { mood_policy }
    }

    #[must_use]
    pub fn mood_policy(&self) -> MoodPolicy {
        self.mood_policy
    }

    /// Fields are checked in order mood, genres, language, platform and the
    /// first failure is returned.
    pub fn normalize(&self, raw: &RawPreferences) -> Result<CanonicalPreferences, ValidationError> {
        let mood = self.normalize_mood(&raw.mood)?;
        let genres = normalize_genres(&raw.genres)?;
        let language = Language::parse(&raw.language)
            .ok_or_else(|| ValidationError::UnrecognizedLanguage(raw.language.clone()))?;
        let platform = Platform::parse(&raw.platform)
            .ok_or_else(|| ValidationError::UnrecognizedPlatform(raw.platform.clone()))?;

        Ok(CanonicalPreferences::from_parts(
            mood, genres, language, platform,
        ))
    }

    fn normalize_mood(&self, raw: &str) -> Result<Mood, ValidationError> {
        match (Mood::parse(raw), self.mood_policy) {
            (Some(mood), _) => Ok(mood),
            (None, MoodPolicy::ClampTo(fallback)) => {
                debug!(raw_mood = raw, fallback = %fallback, "clamping unrecognized mood");
                Ok(fallback)
            }
            (None, MoodPolicy::Reject) => Err(ValidationError::UnrecognizedMood(raw.to_string())),
        }
    }
}

/// Drops unknown entries and duplicates, keeping first-occurrence order.
fn normalize_genres(raw: &[String]) -> Result<Vec<Genre>, ValidationError> {
    let mut genres: Vec<Genre> = Vec::with_capacity(raw.len());
    for entry in raw {
        match Genre::parse(entry) {
            Some(genre) if !genres.contains(&genre) => genres.push(genre),
            Some(_) => {}
            None => debug!(genre = entry.as_str(), "dropping unrecognized genre"),
        }
    }

    if genres.is_empty() {
        return Err(ValidationError::EmptyGenreSet);
    }
    Ok(genres)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(mood: &str, genres: &[&str], language: &str, platform: &str) -> RawPreferences {
        RawPreferences {
            mood: mood.into(),
            genres: genres.iter().map(|g| (*g).to_string()).collect(),
            language: language.into(),
            platform: platform.into(),
        }
    }

    #[test]
    fn test_genres_are_deduplicated_in_first_occurrence_order() {
        let prefs = PreferenceNormalizer::default()
            .normalize(&raw("Happy", &["Drama", "Drama", "Sci-Fi"], "English", "Netflix"))
            .unwrap();
        assert_eq!(prefs.genres(), &[Genre::Drama, Genre::SciFi]);
    }

    #[test]
    fn test_case_variants_count_as_duplicates() {
        let prefs = PreferenceNormalizer::default()
            .normalize(&raw("Happy", &["comedy", "COMEDY", "Horror"], "Any", "Any Platform"))
            .unwrap();
        assert_eq!(prefs.genres(), &[Genre::Comedy, Genre::Horror]);
    }

    #[test]
    fn test_empty_genres_fail() {
        let err = PreferenceNormalizer::default()
            .normalize(&raw("Happy", &[], "English", "Netflix"))
            .unwrap_err();
        assert_eq!(err, ValidationError::EmptyGenreSet);
    }

    #[test]
    fn test_unknown_genres_are_dropped_when_one_survives() {
        let prefs = PreferenceNormalizer::default()
            .normalize(&raw("Happy", &["Polka", "Western", "???"], "English", "Netflix"))
            .unwrap();
        assert_eq!(prefs.genres(), &[Genre::Western]);
    }

    #[test]
    fn test_all_unknown_genres_fail() {
        let err = PreferenceNormalizer::default()
            .normalize(&raw("Happy", &["Polka", "Vaporwave"], "English", "Netflix"))
            .unwrap_err();
        assert_eq!(err, ValidationError::EmptyGenreSet);
    }

    #[test]
    fn test_mood_matches_case_insensitively() {
        for input in ["feel-good", "FEEL-GOOD", "Feel-Good"] {
            let prefs = PreferenceNormalizer::default()
                .normalize(&raw(input, &["Drama"], "English", "Netflix"))
                .unwrap();
            assert_eq!(prefs.mood(), Mood::FeelGood);
            assert_eq!(prefs.mood().label(), "Feel-good");
        }
    }

    #[test]
    fn test_unknown_mood_rejected_by_default() {
        let err = PreferenceNormalizer::default()
            .normalize(&raw("grumpy", &["Drama"], "English", "Netflix"))
            .unwrap_err();
        assert_eq!(err, ValidationError::UnrecognizedMood("grumpy".into()));
    }

    #[test]
    fn test_unknown_mood_clamped_when_configured() {
        let normalizer = PreferenceNormalizer::new(MoodPolicy::ClampTo(Mood::Relaxed));
        let prefs = normalizer
            .normalize(&raw("grumpy", &["Drama"], "English", "Netflix"))
            .unwrap();
        assert_eq!(prefs.mood(), Mood::Relaxed);
    }

    #[test]
    fn test_wildcards_are_accepted() {
        let prefs = PreferenceNormalizer::default()
            .normalize(&raw("Sad", &["Drama"], "any", "Any Platform"))
            .unwrap();
        assert!(prefs.language().is_wildcard());
        assert!(prefs.platform().is_wildcard());
    }

    #[test]
    fn test_unknown_language_and_platform_fail() {
        let normalizer = PreferenceNormalizer::default();
        assert_eq!(
            normalizer
                .normalize(&raw("Sad", &["Drama"], "Klingon", "Netflix"))
                .unwrap_err(),
            ValidationError::UnrecognizedLanguage("Klingon".into())
        );
        assert_eq!(
            normalizer
                .normalize(&raw("Sad", &["Drama"], "English", "Betamax"))
                .unwrap_err(),
            ValidationError::UnrecognizedPlatform("Betamax".into())
        );
    }

    #[test]
    fn test_first_failure_wins() {
        let err = PreferenceNormalizer::default()
            .normalize(&raw("grumpy", &[], "Klingon", "Betamax"))
            .unwrap_err();
        assert!(matches!(err, ValidationError::UnrecognizedMood(_)));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let normalizer = PreferenceNormalizer::default();
        let first = normalizer
            .normalize(&raw(
                " thriller ",
                &["action", "Polka", "ACTION", "science fiction"],
                "english",
                "prime video",
            ))
            .unwrap();
        let second = normalizer.normalize(&first.to_raw()).unwrap();
        assert_eq!(first, second);
    }
}
