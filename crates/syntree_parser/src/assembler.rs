//! Phrase assembly.
//!
//! Groups a tagged token stream into a sentence tree with a single open
//! phrase accumulator:
//!
//! | token         | effect                                   |
//! |---------------|------------------------------------------|
//! | `DET`, `PRON` | opens an `NP`                            |
//! | `NOUN`        | opens an `NP` when no phrase is open     |
//! | `VERB`, `AUX` | opens a `VP`, which closes after it      |
//! | `PREP`        | opens a `PP`                             |
//! | anything else | joins the open phrase, or stands alone   |
//!
//! Opening a phrase closes the previous one. A token with no open phrase is
//! wrapped in a fallback phrase tagged like the token itself, closed at once.
//! The result is flat: the root holds phrases and phrases hold terminals.

use syntree_foundation::{
    Error, LanguageCode, NodeId, NodeIdGenerator, NodeMetadata, PhraseTag, PosTag, Result, Tag,
    TreeNode,
};
use tracing::debug;

/// Label of the sentence root.
pub const ROOT_LABEL: &str = "S";

/// A word with its part-of-speech tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaggedToken {
    /// The word as typed.
    pub word: String,
    /// Its tag.
    pub tag: PosTag,
}

impl TaggedToken {
    /// Creates a tagged token.
    #[must_use]
    pub fn new(word: impl Into<String>, tag: PosTag) -> Self {
        Self {
            word: word.into(),
            tag,
        }
    }
}

/// The phrase a token opens, given whether a phrase is already open.
#[must_use]
pub const fn opens_phrase(tag: PosTag, phrase_open: bool) -> Option<PhraseTag> {
    match tag {
        PosTag::Det | PosTag::Pron => Some(PhraseTag::Np),
        PosTag::Noun if !phrase_open => Some(PhraseTag::Np),
        PosTag::Verb | PosTag::Aux => Some(PhraseTag::Vp),
        PosTag::Prep => Some(PhraseTag::Pp),
        _ => None,
    }
}

const fn closes_phrase(tag: PosTag) -> bool {
    matches!(tag, PosTag::Verb | PosTag::Aux)
}

/// Assembles tagged tokens into sentence trees.
#[derive(Clone, Debug, Default)]
pub struct PhraseAssembler {
    language: Option<LanguageCode>,
    include_metadata: bool,
}

impl PhraseAssembler {
    /// Creates an assembler that attaches no metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to attach `pos` metadata to terminals and, when a
    /// language is given, `language` metadata to the root.
    #[must_use]
    pub fn with_metadata(mut self, language: Option<LanguageCode>) -> Self {
        self.include_metadata = true;
        self.language = language;
        self
    }

    /// Assembles a token stream into a tree.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` if there are no tokens.
    pub fn assemble(&self, tokens: &[TaggedToken], ids: &mut NodeIdGenerator) -> Result<TreeNode> {
        if tokens.is_empty() {
            return Err(Error::empty_input());
        }

        let mut root = TreeNode::new(ids.next_id(), ROOT_LABEL, Tag::Sentence);
        if self.include_metadata {
            if let Some(language) = self.language {
                root = root.with_metadata(NodeMetadata::language(language));
            }
        }

        let mut current: Option<OpenPhrase> = None;
        for token in tokens {
            if let Some(phrase) = opens_phrase(token.tag, current.is_some()) {
                if let Some(done) = current.take() {
                    root = root.with_child(done.close());
                }
                current = Some(OpenPhrase::new(ids.next_id(), phrase.into()));
            }

            let terminal = self.terminal(token, ids.next_id());
            match current.as_mut() {
                Some(open) => open.children.push(terminal),
                None => {
                    let fallback = OpenPhrase {
                        id: ids.next_id(),
                        tag: Tag::Pos(token.tag),
                        children: vec![terminal],
                    };
                    root = root.with_child(fallback.close());
                }
            }

            if closes_phrase(token.tag) {
                if let Some(done) = current.take() {
                    root = root.with_child(done.close());
                }
            }
        }
        if let Some(done) = current.take() {
            root = root.with_child(done.close());
        }

        debug!(
            tokens = tokens.len(),
            phrases = root.children.len(),
            "assembled sentence"
        );
        Ok(root)
    }

    fn terminal(&self, token: &TaggedToken, id: NodeId) -> TreeNode {
        let node = TreeNode::terminal(id, token.word.clone(), token.tag);
        if self.include_metadata {
            node.with_metadata(NodeMetadata::pos(token.tag.into()))
        } else {
            node
        }
    }
}

struct OpenPhrase {
    id: NodeId,
    tag: Tag,
    children: Vec<TreeNode>,
}

impl OpenPhrase {
    fn new(id: NodeId, tag: Tag) -> Self {
        Self {
            id,
            tag,
            children: Vec::new(),
        }
    }

    fn close(self) -> TreeNode {
        let label = self.tag.name().to_string();
        self.children
            .into_iter()
            .fold(TreeNode::new(self.id, label, self.tag), TreeNode::with_child)
    }
}
