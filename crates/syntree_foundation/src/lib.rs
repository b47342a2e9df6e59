//! Core tree values, tags, identifiers, and errors for syntree.
//!
//! This crate provides:
//! - [`TreeNode`] - The immutable syntax-tree value
//! - [`Tag`] - The closed universe of part-of-speech and phrase tags
//! - [`NodeId`] - Tree-unique node identifiers and their generator
//! - [`LanguageCode`] - Supported languages
//! - [`Error`] - Rich error types with context
//! - [`ValidationError`] - Grammar findings with a stable code vocabulary
//! - Persistent collections ([`LtVec`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod finding;
pub mod id;
pub mod language;
pub mod node;
pub mod pretty;
pub mod tag;

pub use collections::LtVec;
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use finding::{Detail, ErrorCode, ErrorDetails, ValidationError};
pub use id::{NodeId, NodeIdGenerator};
pub use language::LanguageCode;
pub use node::{NodeMetadata, TreeNode};
pub use pretty::{PrettyConfig, render_text, render_text_with_config};
pub use tag::{PhraseTag, PosTag, Tag};
