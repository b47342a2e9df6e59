//! Part-of-speech classification.
//!
//! Classification is a fixed cascade, the first answer wins:
//!
//! 1. exact lexicon match, ignoring case
//! 2. English only: the lexicon again with `es` or `s` stripped
//! 3. the injected [`OpenClassTagger`], if any
//! 4. `UNKNOWN`
//!
//! `UNKNOWN` is an ordinary tag, never an error. A failing open-class tagger
//! degrades only the token it was asked about.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use syntree_foundation::{LanguageCode, PosTag};
use thiserror::Error;
use tracing::{trace, warn};

use crate::lexicon::Lexicon;

/// Failure of an open-class tagger.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TaggerError {
    /// The tagger did not answer in time.
    #[error("tagger timed out")]
    Timeout,
    /// The tagger could not be reached or refused the request.
    #[error("tagger unavailable: {0}")]
    Unavailable(String),
}

/// A source of tags for words the lexicon does not know.
///
/// `Ok(None)` means the tagger has no opinion; implementations for a single
/// language decline the others this way.
pub trait OpenClassTagger: Send + Sync {
    /// Tags one word.
    ///
    /// # Errors
    ///
    /// Returns a [`TaggerError`] when no answer could be obtained.
    fn tag(&self, word: &str, language: LanguageCode) -> Result<Option<PosTag>, TaggerError>;
}

impl<T: OpenClassTagger + ?Sized> OpenClassTagger for Arc<T> {
    fn tag(&self, word: &str, language: LanguageCode) -> Result<Option<PosTag>, TaggerError> {
        (**self).tag(word, language)
    }
}

impl<T: OpenClassTagger + ?Sized> OpenClassTagger for Box<T> {
    fn tag(&self, word: &str, language: LanguageCode) -> Result<Option<PosTag>, TaggerError> {
        (**self).tag(word, language)
    }
}

/// English suffix heuristic.
///
/// `-ly` is an adverb, `-ing` and `-ed` verbs, `-ful` and `-y` adjectives,
/// `-s` and `-es` nouns. Other languages are declined.
#[derive(Clone, Copy, Debug, Default)]
pub struct SuffixTagger;

impl SuffixTagger {
    const RULES: [(&'static str, PosTag); 7] = [
        ("ly", PosTag::Adv),
        ("ing", PosTag::Verb),
        ("ed", PosTag::Verb),
        ("ful", PosTag::Adj),
        ("y", PosTag::Adj),
        ("es", PosTag::Noun),
        ("s", PosTag::Noun),
    ];
}

impl OpenClassTagger for SuffixTagger {
    fn tag(&self, word: &str, language: LanguageCode) -> Result<Option<PosTag>, TaggerError> {
        if language != LanguageCode::English {
            return Ok(None);
        }
        let word = word.to_lowercase();
        // The stem must keep at least two characters.
        Ok(Self::RULES
            .iter()
            .find(|(suffix, _)| {
                word.strip_suffix(suffix)
                    .is_some_and(|stem| stem.chars().count() >= 2)
            })
            .map(|(_, tag)| *tag))
    }
}

/// Maps words to part-of-speech tags for every supported language.
#[derive(Clone)]
pub struct Classifier {
    lexicons: HashMap<LanguageCode, Lexicon>,
    tagger: Option<Arc<dyn OpenClassTagger>>,
}

impl Classifier {
    /// Creates a classifier with no lexicons and no tagger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lexicons: HashMap::new(),
            tagger: None,
        }
    }

    /// Creates a classifier with the built-in lexicon of every supported language.
    #[must_use]
    pub fn standard() -> Self {
        LanguageCode::ALL
            .into_iter()
            .fold(Self::new(), |classifier, language| {
                classifier.with_lexicon(Lexicon::standard(language))
            })
    }

    /// Builder method to install a lexicon, replacing any for the same language.
    #[must_use]
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicons.insert(lexicon.language(), lexicon);
        self
    }

    /// Builder method to install an open-class tagger.
    #[must_use]
    pub fn with_tagger(mut self, tagger: impl OpenClassTagger + 'static) -> Self {
        self.tagger = Some(Arc::new(tagger));
        self
    }

    /// Builder method to install a shared open-class tagger.
    #[must_use]
    pub fn with_shared_tagger(mut self, tagger: Arc<dyn OpenClassTagger>) -> Self {
        self.tagger = Some(tagger);
        self
    }

    /// Returns true if an open-class tagger is installed.
    #[must_use]
    pub fn has_tagger(&self) -> bool {
        self.tagger.is_some()
    }

    /// The lexicon for a language, if one is installed.
    #[must_use]
    pub fn lexicon(&self, language: LanguageCode) -> Option<&Lexicon> {
        self.lexicons.get(&language)
    }

    /// Classifies one word.
    #[must_use]
    pub fn classify(&self, word: &str, language: LanguageCode) -> PosTag {
        let lower = word.to_lowercase();

        if let Some(tag) = self.lookup(&lower, language) {
            trace!(word, %language, %tag, "lexicon match");
            return tag;
        }

        match self.tagger.as_ref().map(|t| t.tag(word, language)) {
            Some(Ok(Some(tag))) => {
                trace!(word, %language, %tag, "open-class tagger match");
                tag
            }
            Some(Err(err)) => {
                warn!(word, %language, error = %err, "open-class tagger failed; tagging as UNKNOWN");
                PosTag::Unknown
            }
            Some(Ok(None)) | None => {
                trace!(word, %language, "no match");
                PosTag::Unknown
            }
        }
    }

    fn lookup(&self, lower: &str, language: LanguageCode) -> Option<PosTag> {
        let lexicon = self.lexicons.get(&language)?;
        if let Some(tag) = lexicon.lookup_lowercase(lower) {
            return Some(tag);
        }
        if language != LanguageCode::English {
            return None;
        }
        ["es", "s"]
            .into_iter()
            .filter_map(|suffix| lower.strip_suffix(suffix))
            .filter(|stem| !stem.is_empty())
            .find_map(|stem| lexicon.lookup_lowercase(stem))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut languages: Vec<_> = self.lexicons.keys().copied().collect();
        languages.sort();
        f.debug_struct("Classifier")
            .field("languages", &languages)
            .field("tagger", &self.tagger.is_some())
            .finish()
    }
}
