//! Language grammars and tree validation for syntree.
//!
//! This crate provides:
//! - [`LanguageGrammar`] - Phrase order, required phrases and per-phrase rules
//! - [`GrammarRegistry`] - Lookup of the grammar for a [`LanguageCode`]
//! - [`validate`] - Accumulating structural and grammatical checks
//!
//! [`LanguageCode`]: syntree_foundation::LanguageCode

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod grammar;
pub mod languages;
pub mod validate;

pub use grammar::{GrammarRegistry, LanguageGrammar, PhraseRule};
pub use languages::grammar_for;
pub use validate::{validate, validate_or_fail};
