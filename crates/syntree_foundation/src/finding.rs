//! Validation findings.
//!
//! Findings are data, not faults: a validation pass returns every finding it
//! sees and callers decide whether any of them is blocking. The code
//! vocabulary is stable across the system boundary.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::id::NodeId;
use crate::tag::Tag;

/// Stable finding codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ErrorCode {
    /// A root child appears before a phrase that must precede it.
    InvalidPhraseOrder,
    /// A required phrase is absent from the root's children.
    MissingRequiredPhrase,
    /// A phrase contains a child whose tag it does not allow.
    InvalidNodeType,
    /// A phrase has too few or too many children.
    InvalidChildrenCount,
    /// A tag is outside the tag universe or has no rule where one is needed.
    UnknownPhraseType,
    /// The tree itself is malformed (duplicate ids, bad edits).
    InvalidTreeStructure,
    /// The input could not be parsed at all.
    ParsingError,
}

impl ErrorCode {
    /// Returns the stable code string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidPhraseOrder => "INVALID_PHRASE_ORDER",
            Self::MissingRequiredPhrase => "MISSING_REQUIRED_PHRASE",
            Self::InvalidNodeType => "INVALID_NODE_TYPE",
            Self::InvalidChildrenCount => "INVALID_CHILDREN_COUNT",
            Self::UnknownPhraseType => "UNKNOWN_PHRASE_TYPE",
            Self::InvalidTreeStructure => "INVALID_TREE_STRUCTURE",
            Self::ParsingError => "PARSING_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An expected or actual value attached to a finding.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "value", rename_all = "camelCase")
)]
pub enum Detail {
    /// A count (child-count bounds).
    Count(usize),
    /// A single tag.
    Tag(Tag),
    /// An ordered list of tags.
    Tags(Vec<Tag>),
    /// Free text.
    Text(String),
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Tag(tag) => write!(f, "{tag}"),
            Self::Tags(tags) => {
                let names: Vec<&str> = tags.iter().map(Tag::name).collect();
                write!(f, "[{}]", names.join(", "))
            }
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Where a finding applies and what was expected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ErrorDetails {
    /// Node the finding is scoped to.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub node_id: Option<NodeId>,
    /// Phrase the finding concerns.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub phrase_type: Option<Tag>,
    /// What the grammar expected.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub expected: Option<Detail>,
    /// What the tree actually holds.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub actual: Option<Detail>,
    /// Zero-based position among siblings.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<usize>,
}

/// A single structural or grammar finding.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationError {
    /// Stable code.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location and expectation details.
    #[cfg_attr(feature = "serde", serde(default))]
    pub details: ErrorDetails,
}

impl ValidationError {
    /// Creates a finding with empty details.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: ErrorDetails::default(),
        }
    }

    /// Scopes the finding to a node.
    #[must_use]
    pub fn at_node(mut self, id: NodeId) -> Self {
        self.details.node_id = Some(id);
        self
    }

    /// Names the phrase the finding concerns.
    #[must_use]
    pub fn in_phrase(mut self, phrase: Tag) -> Self {
        self.details.phrase_type = Some(phrase);
        self
    }

    /// Attaches the expected value.
    #[must_use]
    pub fn expected(mut self, expected: Detail) -> Self {
        self.details.expected = Some(expected);
        self
    }

    /// Attaches the actual value.
    #[must_use]
    pub fn actual(mut self, actual: Detail) -> Self {
        self.details.actual = Some(actual);
        self
    }

    /// Attaches a sibling position.
    #[must_use]
    pub fn at_position(mut self, position: usize) -> Self {
        self.details.position = Some(position);
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}
