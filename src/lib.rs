//! syntree - Syntax trees for short sentences
//!
//! This crate re-exports all layers of the syntree system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: syntree_runtime     Serialization, cached tagger, session, REPL, CLI
//! Layer 2: syntree_parser      Tokenizer, classifier, phrase assembler
//!          syntree_editor      Immutable tree edits
//! Layer 1: syntree_grammar     Per-language phrase grammars, validator
//! Layer 0: syntree_foundation  Core types (TreeNode, Tag, NodeId, Error)
//! ```

pub use syntree_editor as editor;
pub use syntree_foundation as foundation;
pub use syntree_grammar as grammar;
pub use syntree_parser as parser;
pub use syntree_runtime as runtime;
