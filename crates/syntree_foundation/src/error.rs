//! Error types for syntree.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Validation findings are not errors; they only become one when a caller
//! asks for fail-fast semantics ([`ErrorKind::Validation`]).

use std::fmt;

use thiserror::Error;

use crate::finding::{Detail, ErrorCode, ValidationError};
use crate::id::NodeId;

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for syntree operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unsupported language error.
    #[must_use]
    pub fn unsupported_language(code: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedLanguage(code.into()))
    }

    /// Creates an empty input error.
    #[must_use]
    pub fn empty_input() -> Self {
        Self::new(ErrorKind::EmptyInput)
    }

    /// Creates a node not found error.
    #[must_use]
    pub fn node_not_found(id: NodeId) -> Self {
        Self::new(ErrorKind::NodeNotFound(id))
    }

    /// Creates a root removal error.
    #[must_use]
    pub fn cannot_remove_root(id: NodeId) -> Self {
        Self::new(ErrorKind::CannotRemoveRoot(id))
    }

    /// Creates an invalid move error.
    #[must_use]
    pub fn invalid_move(node: NodeId, target: NodeId) -> Self {
        Self::new(ErrorKind::InvalidMove { node, target })
    }

    /// Creates an aggregate validation failure.
    #[must_use]
    pub fn validation(findings: Vec<ValidationError>) -> Self {
        Self::new(ErrorKind::Validation(findings))
    }

    /// Returns the finding code this error maps to at the system boundary.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match &self.kind {
            ErrorKind::UnsupportedLanguage(_)
            | ErrorKind::EmptyInput
            | ErrorKind::SerializationError(_)
            | ErrorKind::IoError(_) => ErrorCode::ParsingError,
            ErrorKind::NodeNotFound(_)
            | ErrorKind::CannotRemoveRoot(_)
            | ErrorKind::InvalidMove { .. }
            | ErrorKind::Internal(_) => ErrorCode::InvalidTreeStructure,
            ErrorKind::Validation(findings) => findings
                .first()
                .map_or(ErrorCode::InvalidTreeStructure, |f| f.code),
        }
    }

    /// Renders this error as findings, so callers can display every failure
    /// the same way.
    #[must_use]
    pub fn to_findings(&self) -> Vec<ValidationError> {
        if let ErrorKind::Validation(findings) = &self.kind {
            return findings.clone();
        }

        let mut finding = ValidationError::new(self.code(), self.kind.to_string());
        match &self.kind {
            ErrorKind::NodeNotFound(id) | ErrorKind::CannotRemoveRoot(id) => {
                finding = finding.at_node(id.clone());
            }
            ErrorKind::InvalidMove { node, target } => {
                finding = finding
                    .at_node(node.clone())
                    .actual(Detail::Text(target.to_string()));
            }
            _ => {}
        }
        vec![finding]
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The language code has no lexicon or grammar.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The sentence or token sequence is empty.
    #[error("empty input")]
    EmptyInput,

    /// No node with this id exists in the tree.
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    /// The root of a tree cannot be removed or detached.
    #[error("cannot remove root node: {0}")]
    CannotRemoveRoot(NodeId),

    /// A node cannot be moved under itself or one of its descendants.
    #[error("cannot move node {node} under {target}: target is inside the moved subtree")]
    InvalidMove {
        /// The node being moved.
        node: NodeId,
        /// The requested new parent.
        target: NodeId,
    },

    /// Validation produced findings and the caller asked to fail.
    #[error("tree validation failed with {} finding(s)", .0.len())]
    Validation(Vec<ValidationError>),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Filesystem access failed.
    #[error("io error: {0}")]
    IoError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source text being processed.
    pub source: Option<String>,
    /// Operations that were in progress, outermost last.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source text.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds an operation frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source:?}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
