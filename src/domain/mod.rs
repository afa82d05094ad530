pub mod catalog;
pub mod envelope;
pub mod preferences;

pub use catalog::{Genre, Language, Mood, Platform};
pub use envelope::RecommendationEnvelope;
pub use preferences::{CanonicalPreferences, RawPreferences};
