use serde::{Deserialize, Serialize};

use super::catalog::{Genre, Language, Mood, Platform};

/// Preference fields exactly as the client sent them.
///
/// Missing fields deserialize as empty values so they fail normalization with a
/// field-specific error instead of a generic JSON rejection.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RawPreferences {
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub platform: String,
}

/// Validated preferences. Only the normalizer builds these, so `genres` is
/// always non-empty and free of duplicates.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CanonicalPreferences {
    mood: Mood,
    genres: Vec<Genre>,
    language: Language,
    platform: Platform,
}

impl CanonicalPreferences {
    pub(crate) fn from_parts(
        mood: Mood,
        genres: Vec<Genre>,
        language: Language,
        platform: Platform,
    ) -> Self {
        debug_assert!(!genres.is_empty());
        Self {
            mood,
            genres,
            language,
            platform,
        }
    }

    #[must_use]
    pub fn mood(&self) -> Mood {
        self.mood
    }

    #[must_use]
    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Render back into the untrusted shape using display labels.
    #[must_use]
    pub fn to_raw(&self) -> RawPreferences {
        RawPreferences {
            mood: self.mood.label().to_string(),
            genres: self.genres.iter().map(|g| g.label().to_string()).collect(),
            language: self.language.label().to_string(),
            platform: self.platform.label().to_string(),
        }
    }
}
