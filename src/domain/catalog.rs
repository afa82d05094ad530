//! Fixed vocabularies accepted for each preference field.
//!
//! Every entry has one display label (used in prompts and responses) and any
//! number of aliases. Lookups trim surrounding whitespace and ignore ASCII case.

use serde::{Serialize, Serializer};
use std::fmt;

macro_rules! catalog {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $label:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Display label, also the value that round-trips through [`Self::parse`].
            #[must_use]
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            #[must_use]
            pub fn parse(input: &str) -> Option<Self> {
                let needle = input.trim();
                $(
                    if needle.eq_ignore_ascii_case($label)
                        $(|| needle.eq_ignore_ascii_case($alias))*
                    {
                        return Some($name::$variant);
                    }
                )+
                None
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }
    };
}

catalog! {
    Mood {
        Happy => "Happy",
        Sad => "Sad",
        Excited => "Excited",
        Relaxed => "Relaxed",
        Romantic => "Romantic",
        Thriller => "Thriller",
        Adventurous => "Adventurous",
        Nostalgic => "Nostalgic",
        FeelGood => "Feel-good" | "feel good" | "feelgood",
        Dark => "Dark",
        Inspirational => "Inspirational",
        Curious => "Curious",
    }
}

catalog! {
    Genre {
        Action => "Action",
        Adventure => "Adventure",
        Animation => "Animation",
        Comedy => "Comedy",
        Crime => "Crime",
        Documentary => "Documentary",
        Drama => "Drama",
        Family => "Family",
        Fantasy => "Fantasy",
        History => "History",
        Horror => "Horror",
        Musical => "Musical",
        Mystery => "Mystery",
        Romance => "Romance",
        SciFi => "Sci-Fi" | "science fiction" | "scifi" | "sci fi",
        Thriller => "Thriller",
        War => "War",
        Western => "Western",
    }
}

catalog! {
    /// `Any` is the wildcard: the viewer has no language preference.
    Language {
        Any => "Any" | "any language",
        English => "English",
        Hindi => "Hindi",
        Spanish => "Spanish",
        French => "French",
        German => "German",
        Italian => "Italian",
        Japanese => "Japanese",
        Korean => "Korean",
        Mandarin => "Mandarin" | "chinese",
        Tamil => "Tamil",
        Telugu => "Telugu",
        Malayalam => "Malayalam",
    }
}

catalog! {
    /// `Any` is the wildcard: the viewer has no platform preference.
    Platform {
        Any => "Any Platform" | "any",
        Netflix => "Netflix",
        AmazonPrimeVideo => "Amazon Prime Video" | "prime video" | "amazon prime",
        DisneyPlus => "Disney+" | "disney plus",
        Hulu => "Hulu",
        Max => "Max" | "hbo max",
        AppleTvPlus => "Apple TV+" | "apple tv",
        Peacock => "Peacock",
        ParamountPlus => "Paramount+" | "paramount plus",
        JioHotstar => "JioHotstar" | "hotstar" | "disney+ hotstar",
    }
}

impl Language {
    #[must_use]
    pub fn is_wildcard(self) -> bool {
        self == Language::Any
    }
}

impl Platform {
    #[must_use]
    pub fn is_wildcard(self) -> bool {
        self == Platform::Any
    }
}
