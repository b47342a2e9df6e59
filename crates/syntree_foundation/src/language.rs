//! Supported languages.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A language the engine has a lexicon and grammar for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageCode {
    /// English.
    English,
    /// Spanish.
    Spanish,
    /// Russian.
    Russian,
    /// Kazakh.
    Kazakh,
}

impl LanguageCode {
    /// Every supported language.
    pub const ALL: [LanguageCode; 4] = [
        LanguageCode::English,
        LanguageCode::Spanish,
        LanguageCode::Russian,
        LanguageCode::Kazakh,
    ];

    /// Returns the two-letter code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::Russian => "ru",
            Self::Kazakh => "kk",
        }
    }

    /// Returns the English name of the language.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Spanish => "spanish",
            Self::Russian => "russian",
            Self::Kazakh => "kazakh",
        }
    }
}

impl FromStr for LanguageCode {
    type Err = Error;

    /// Accepts the two-letter code or the English name, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == wanted || lang.name() == wanted)
            .ok_or_else(|| Error::unsupported_language(s))
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::LanguageCode;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for LanguageCode {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.code())
        }
    }

    impl<'de> Deserialize<'de> for LanguageCode {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let code = String::deserialize(deserializer)?;
            code.parse().map_err(D::Error::custom)
        }
    }
}
