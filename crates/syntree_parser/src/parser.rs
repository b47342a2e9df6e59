//! Main parser pipeline.
//!
//! Orchestrates the full flow from a raw sentence to a validated tree:
//! tokenize, classify every token, assemble, validate.

use syntree_foundation::{
    Error, ErrorContext, LanguageCode, NodeIdGenerator, Result, TreeNode, ValidationError,
};
use syntree_grammar::{GrammarRegistry, LanguageGrammar, validate, validate_or_fail};
use tracing::debug;

use crate::assembler::{PhraseAssembler, TaggedToken};
use crate::classifier::Classifier;
use crate::tokenizer::SentenceTokenizer;

/// Configuration for a [`SyntaxParser`].
#[derive(Clone, Debug)]
pub struct ParserConfig {
    /// Language of the sentences to parse.
    pub language: LanguageCode,
    /// Attach `pos` metadata to terminals and `language` to the root.
    pub include_metadata: bool,
    /// Seed for node id generation.
    pub seed: u64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            language: LanguageCode::English,
            include_metadata: true,
            seed: 0,
        }
    }
}

impl ParserConfig {
    /// Builder method to set the language.
    #[must_use]
    pub fn with_language(mut self, language: LanguageCode) -> Self {
        self.language = language;
        self
    }

    /// Builder method to enable or disable metadata.
    #[must_use]
    pub fn with_metadata(mut self, include_metadata: bool) -> Self {
        self.include_metadata = include_metadata;
        self
    }

    /// Builder method to set the id seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// A parsed tree together with its validation findings.
#[derive(Clone, Debug)]
pub struct Analysis {
    /// The assembled tree.
    pub tree: TreeNode,
    /// Every finding the validator reported, possibly none.
    pub findings: Vec<ValidationError>,
}

impl Analysis {
    /// Returns true if the tree has no findings.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.findings.is_empty()
    }
}

/// The sentence-to-tree parser.
#[derive(Debug)]
pub struct SyntaxParser {
    config: ParserConfig,
    classifier: Classifier,
    grammars: GrammarRegistry,
    ids: NodeIdGenerator,
}

impl SyntaxParser {
    /// Creates a parser with the built-in lexicons and grammars.
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        let ids = NodeIdGenerator::seeded(config.seed);
        Self {
            config,
            classifier: Classifier::standard(),
            grammars: GrammarRegistry::standard(),
            ids,
        }
    }

    /// Builder method to replace the classifier.
    #[must_use]
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Builder method to replace the grammar registry.
    #[must_use]
    pub fn with_grammars(mut self, grammars: GrammarRegistry) -> Self {
        self.grammars = grammars;
        self
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// The active language.
    #[must_use]
    pub fn language(&self) -> LanguageCode {
        self.config.language
    }

    /// Switches the language for subsequent parses.
    pub fn set_language(&mut self, language: LanguageCode) {
        self.config.language = language;
    }

    /// The classifier in use.
    #[must_use]
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// The grammar for the active language.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedLanguage` if no grammar is registered for it.
    pub fn grammar(&self) -> Result<&LanguageGrammar> {
        self.grammars.get(self.config.language)
    }

    /// Tokenizes and classifies a sentence without assembling it.
    #[must_use]
    pub fn tag(&self, sentence: &str) -> Vec<TaggedToken> {
        let language = self.config.language;
        SentenceTokenizer::tokenize(sentence)
            .into_iter()
            .map(|token| {
                let tag = self.classifier.classify(&token.text, language);
                TaggedToken::new(token.text, tag)
            })
            .collect()
    }

    /// Parses a sentence into a tree without validating it.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedLanguage` if the active language has no grammar,
    /// or `EmptyInput` if the sentence has no words.
    pub fn parse(&mut self, sentence: &str) -> Result<TreeNode> {
        // Fail before any classification work for an unknown language.
        self.grammar()?;

        let tokens = self.tag(sentence);
        let assembler = if self.config.include_metadata {
            PhraseAssembler::new().with_metadata(Some(self.config.language))
        } else {
            PhraseAssembler::new()
        };
        let tree = assembler
            .assemble(&tokens, &mut self.ids)
            .map_err(|err| with_sentence(err, sentence))?;

        debug!(
            language = %self.config.language,
            tokens = tokens.len(),
            nodes = tree.node_count(),
            "parsed sentence"
        );
        Ok(tree)
    }

    /// Parses a sentence and validates the tree, returning both.
    ///
    /// # Errors
    ///
    /// Fails only for input errors; findings are returned as data.
    pub fn analyze(&mut self, sentence: &str) -> Result<Analysis> {
        let tree = self.parse(sentence)?;
        let findings = validate(&tree, self.grammar()?);
        Ok(Analysis { tree, findings })
    }

    /// Parses a sentence and fails if the tree has any finding.
    ///
    /// # Errors
    ///
    /// Returns input errors as [`parse`](Self::parse) does, or a
    /// `Validation` error carrying every finding.
    pub fn parse_validated(&mut self, sentence: &str) -> Result<TreeNode> {
        let tree = self.parse(sentence)?;
        validate_or_fail(&tree, self.grammar()?)?;
        Ok(tree)
    }

    /// Validates any tree against the active language's grammar.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedLanguage` if the active language has no grammar.
    pub fn validate(&self, tree: &TreeNode) -> Result<Vec<ValidationError>> {
        Ok(validate(tree, self.grammar()?))
    }
}

impl Default for SyntaxParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

fn with_sentence(err: Error, sentence: &str) -> Error {
    let context = ErrorContext::new()
        .with_source(sentence)
        .with_frame("assemble");
    err.with_context(context)
}
