//! Node tags: part-of-speech tags, phrase labels, and the sentence root.
//!
//! The tag universe is closed. Tags read from foreign trees that fall outside
//! it are kept verbatim as [`Tag::Other`] so they survive a round trip and can
//! be reported by validation.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Part-of-speech tag carried by terminal (word) nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PosTag {
    /// Determiner (`the`, `el`).
    Det,
    /// Noun.
    Noun,
    /// Verb.
    Verb,
    /// Adjective.
    Adj,
    /// Adverb.
    Adv,
    /// Pronoun.
    Pron,
    /// Preposition.
    Prep,
    /// Conjunction.
    Conj,
    /// Auxiliary / modal verb.
    Aux,
    /// Numeral.
    Num,
    /// Postposition (Kazakh).
    Post,
    /// No classifier could tag the word.
    Unknown,
}

impl PosTag {
    /// Every part-of-speech tag, in canonical order.
    pub const ALL: [PosTag; 12] = [
        PosTag::Det,
        PosTag::Noun,
        PosTag::Verb,
        PosTag::Adj,
        PosTag::Adv,
        PosTag::Pron,
        PosTag::Prep,
        PosTag::Conj,
        PosTag::Aux,
        PosTag::Num,
        PosTag::Post,
        PosTag::Unknown,
    ];

    /// Returns the canonical upper-case spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Det => "DET",
            Self::Noun => "NOUN",
            Self::Verb => "VERB",
            Self::Adj => "ADJ",
            Self::Adv => "ADV",
            Self::Pron => "PRON",
            Self::Prep => "PREP",
            Self::Conj => "CONJ",
            Self::Aux => "AUX",
            Self::Num => "NUM",
            Self::Post => "POST",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Phrase label carried by non-terminal nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PhraseTag {
    /// Noun phrase.
    Np,
    /// Verb phrase.
    Vp,
    /// Prepositional (or postpositional) phrase.
    Pp,
    /// Adjective phrase.
    Ap,
    /// Adverb phrase.
    Advp,
}

impl PhraseTag {
    /// Every phrase tag, in canonical order.
    pub const ALL: [PhraseTag; 5] = [
        PhraseTag::Np,
        PhraseTag::Vp,
        PhraseTag::Pp,
        PhraseTag::Ap,
        PhraseTag::Advp,
    ];

    /// Returns the canonical upper-case spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Np => "NP",
            Self::Vp => "VP",
            Self::Pp => "PP",
            Self::Ap => "AP",
            Self::Advp => "ADVP",
        }
    }
}

/// The discriminator on a tree node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Terminal part-of-speech tag.
    Pos(PosTag),
    /// Phrase label.
    Phrase(PhraseTag),
    /// The sentence root.
    Sentence,
    /// A tag outside the closed universe, preserved verbatim.
    Other(String),
}

impl Tag {
    /// Spelling of the sentence root tag.
    pub const SENTENCE: &'static str = "SENTENCE";

    /// Shorthand for `Tag::Pos(PosTag::Unknown)`.
    pub const UNKNOWN: Tag = Tag::Pos(PosTag::Unknown);

    /// Parses a tag from its canonical spelling.
    ///
    /// Never fails: anything unrecognised becomes [`Tag::Other`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s == Self::SENTENCE {
            return Self::Sentence;
        }
        if let Some(pos) = PosTag::ALL.iter().find(|p| p.as_str() == s) {
            return Self::Pos(*pos);
        }
        if let Some(phrase) = PhraseTag::ALL.iter().find(|p| p.as_str() == s) {
            return Self::Phrase(*phrase);
        }
        Self::Other(s.to_string())
    }

    /// Returns the spelling used in exports and labels.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Pos(pos) => pos.as_str(),
            Self::Phrase(phrase) => phrase.as_str(),
            Self::Sentence => Self::SENTENCE,
            Self::Other(name) => name,
        }
    }

    /// Returns true if the tag belongs to the closed universe.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Returns the phrase tag, if this is one.
    #[must_use]
    pub const fn as_phrase(&self) -> Option<PhraseTag> {
        match self {
            Self::Phrase(phrase) => Some(*phrase),
            _ => None,
        }
    }

    /// Returns the part-of-speech tag, if this is one.
    #[must_use]
    pub const fn as_pos(&self) -> Option<PosTag> {
        match self {
            Self::Pos(pos) => Some(*pos),
            _ => None,
        }
    }
}

impl From<PosTag> for Tag {
    fn from(pos: PosTag) -> Self {
        Self::Pos(pos)
    }
}

impl From<PhraseTag> for Tag {
    fn from(phrase: PhraseTag) -> Self {
        Self::Phrase(phrase)
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl FromStr for Tag {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PhraseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::Tag;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Tag {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for Tag {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let name = String::deserialize(deserializer)?;
            Ok(Tag::parse(&name))
        }
    }
}
