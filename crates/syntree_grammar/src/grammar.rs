//! Per-language production grammars.
//!
//! A [`LanguageGrammar`] is static configuration: the legal left-to-right
//! order of the sentence root's phrases, which phrases are required, and for
//! each phrase the child-count bounds and the tags it may contain.

use std::collections::{BTreeMap, HashMap};

use syntree_foundation::{Error, LanguageCode, PhraseTag, Result, Tag};

use crate::languages;

/// Child constraints for one phrase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhraseRule {
    /// Minimum number of children (inclusive).
    pub min_children: usize,
    /// Maximum number of children (inclusive).
    pub max_children: usize,
    /// Tags a child may carry, in declaration order.
    pub allowed: Vec<Tag>,
}

impl PhraseRule {
    /// Creates a rule with the given bounds and no allowed child tags.
    #[must_use]
    pub fn new(min_children: usize, max_children: usize) -> Self {
        Self {
            min_children,
            max_children,
            allowed: Vec::new(),
        }
    }

    /// Builder method to add allowed child tags.
    #[must_use]
    pub fn allowing<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        self.allowed.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Returns true if a child with this tag is allowed.
    #[must_use]
    pub fn allows(&self, tag: &Tag) -> bool {
        self.allowed.contains(tag)
    }
}

/// Production rules for one language.
#[derive(Clone, Debug)]
pub struct LanguageGrammar {
    language: LanguageCode,
    phrase_order: Vec<PhraseTag>,
    required: Vec<PhraseTag>,
    optional: Vec<PhraseTag>,
    rules: BTreeMap<PhraseTag, PhraseRule>,
}

impl LanguageGrammar {
    /// Creates an empty grammar for a language.
    #[must_use]
    pub fn new(language: LanguageCode) -> Self {
        Self {
            language,
            phrase_order: Vec::new(),
            required: Vec::new(),
            optional: Vec::new(),
            rules: BTreeMap::new(),
        }
    }

    /// Builder method to set the phrase order.
    #[must_use]
    pub fn with_order(mut self, order: impl IntoIterator<Item = PhraseTag>) -> Self {
        self.phrase_order = order.into_iter().collect();
        self
    }

    /// Builder method to set the required phrases.
    #[must_use]
    pub fn with_required(mut self, required: impl IntoIterator<Item = PhraseTag>) -> Self {
        self.required = required.into_iter().collect();
        self
    }

    /// Builder method to set the optional phrases.
    #[must_use]
    pub fn with_optional(mut self, optional: impl IntoIterator<Item = PhraseTag>) -> Self {
        self.optional = optional.into_iter().collect();
        self
    }

    /// Builder method to add a phrase rule.
    #[must_use]
    pub fn with_rule(mut self, phrase: PhraseTag, rule: PhraseRule) -> Self {
        self.rules.insert(phrase, rule);
        self
    }

    /// The language this grammar describes.
    #[must_use]
    pub const fn language(&self) -> LanguageCode {
        self.language
    }

    /// The only legal left-to-right order of the root's phrases.
    #[must_use]
    pub fn phrase_order(&self) -> &[PhraseTag] {
        &self.phrase_order
    }

    /// Phrases that must appear among the root's children.
    #[must_use]
    pub fn required_phrases(&self) -> &[PhraseTag] {
        &self.required
    }

    /// Phrases that may appear among the root's children.
    #[must_use]
    pub fn optional_phrases(&self) -> &[PhraseTag] {
        &self.optional
    }

    /// Position of a phrase in the order, if it takes part in it.
    #[must_use]
    pub fn order_index(&self, phrase: PhraseTag) -> Option<usize> {
        self.phrase_order.iter().position(|p| *p == phrase)
    }

    /// The rule for a phrase, if one is declared.
    #[must_use]
    pub fn rule(&self, phrase: PhraseTag) -> Option<&PhraseRule> {
        self.rules.get(&phrase)
    }

    /// Tags a child of `phrase` may carry. Empty when no rule is declared.
    #[must_use]
    pub fn allowed_child_types(&self, phrase: PhraseTag) -> &[Tag] {
        match self.rule(phrase) {
            Some(rule) => &rule.allowed,
            None => &[],
        }
    }

    /// Inclusive child-count bounds for `phrase`; unbounded when no rule is declared.
    #[must_use]
    pub fn child_count_bounds(&self, phrase: PhraseTag) -> (usize, usize) {
        self.rule(phrase)
            .map_or((0, usize::MAX), |rule| (rule.min_children, rule.max_children))
    }
}

/// Runtime storage for the grammars of every supported language.
#[derive(Clone, Debug, Default)]
pub struct GrammarRegistry {
    grammars: HashMap<LanguageCode, LanguageGrammar>,
}

impl GrammarRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in grammar of every supported language.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for language in LanguageCode::ALL {
            registry.register(languages::grammar_for(language));
        }
        registry
    }

    /// Registers a grammar, replacing any previous one for the same language.
    pub fn register(&mut self, grammar: LanguageGrammar) {
        self.grammars.insert(grammar.language(), grammar);
    }

    /// Looks up the grammar for a language.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedLanguage` if no grammar is registered for it.
    /// There is no fallback to another language.
    pub fn get(&self, language: LanguageCode) -> Result<&LanguageGrammar> {
        self.grammars
            .get(&language)
            .ok_or_else(|| Error::unsupported_language(language.code()))
    }

    /// Languages with a registered grammar, sorted.
    #[must_use]
    pub fn languages(&self) -> Vec<LanguageCode> {
        let mut languages: Vec<LanguageCode> = self.grammars.keys().copied().collect();
        languages.sort();
        languages
    }
}
