use movie_recommender::domain::{Genre, Language, Mood, Platform, RawPreferences};
use movie_recommender::pipeline::{PreferenceNormalizer, PromptComposer};
use proptest::prelude::*;

/// Flips the ASCII case of each character according to `mask`.
fn recase(label: &str, mask: &[bool]) -> String {
    label
        .chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

fn label_of<T: Copy>(all: &'static [T], label: fn(T) -> &'static str) -> impl Strategy<Value = String> {
    (0..all.len(), prop::collection::vec(any::<bool>(), 1..8), 0..3usize).prop_map(
        move |(index, mask, padding)| {
            let pad = " ".repeat(padding);
            format!("{pad}{}{pad}", recase(label(all[index]), &mask))
        },
    )
}

fn genre_entry() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => label_of(Genre::ALL, Genre::label),
        1 => "[a-zA-Z ]{0,12}",
    ]
}

fn raw_preferences() -> impl Strategy<Value = RawPreferences> {
    (
        label_of(Mood::ALL, Mood::label),
        prop::collection::vec(genre_entry(), 0..10),
        label_of(Language::ALL, Language::label),
        label_of(Platform::ALL, Platform::label),
    )
        .prop_map(|(mood, genres, language, platform)| RawPreferences {
            mood,
            genres,
            language,
            platform,
        })
}

proptest! {
    #[test]
    fn normalization_is_idempotent(raw in raw_preferences()) {
        let normalizer = PreferenceNormalizer::default();
        if let Ok(canonical) = normalizer.normalize(&raw) {
            let again = normalizer.normalize(&canonical.to_raw()).unwrap();
            prop_assert_eq!(again, canonical);
        }
    }

    #[test]
    fn normalized_genres_are_unique_and_known(raw in raw_preferences()) {
        let normalizer = PreferenceNormalizer::default();
        if let Ok(canonical) = normalizer.normalize(&raw) {
            let genres = canonical.genres();
            prop_assert!(!genres.is_empty());
            for (i, genre) in genres.iter().enumerate() {
                prop_assert!(!genres[i + 1..].contains(genre));
                prop_assert!(raw.genres.iter().any(|entry| Genre::parse(entry) == Some(*genre)));
            }
        }
    }

    #[test]
    fn recognized_labels_never_fail(raw in raw_preferences()) {
        let has_known_genre = raw.genres.iter().any(|entry| Genre::parse(entry).is_some());
        let result = PreferenceNormalizer::default().normalize(&raw);
        prop_assert_eq!(result.is_ok(), has_known_genre);
    }

    #[test]
    fn composition_is_deterministic(raw in raw_preferences(), count in 1u8..=10) {
        if let Ok(canonical) = PreferenceNormalizer::default().normalize(&raw) {
            let composer = PromptComposer::new(count);
            let first = composer.compose(&canonical);
            let second = composer.compose(&canonical);
            prop_assert_eq!(first.as_str(), second.as_str());
            let expected = format!("Recommend exactly {count} movies");
            prop_assert!(first.as_str().contains(&expected));
        }
    }
}
