//! Sentence parsing for syntree.
//!
//! This crate turns a raw sentence like "the cat runs" into a syntax tree.
//!
//! # Architecture
//!
//! ```text
//! "the cat runs"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["the", "cat", "runs"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   CLASSIFIER    │  → [DET, NOUN, VERB]   (lexicon, stemming, open-class tagger)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   ASSEMBLER     │  → SENTENCE [ NP [the cat], VP [runs] ]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   VALIDATOR     │  → findings against the language grammar
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert a raw sentence to word tokens
//! - [`lexicon`] - Per-language word lists
//! - [`classifier`] - Part-of-speech classification and the open-class tagger seam
//! - [`assembler`] - Phrase grouping state machine
//! - [`parser`] - Main parser pipeline orchestration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod assembler;
pub mod classifier;
pub mod lexicon;
pub mod parser;
pub mod tokenizer;

pub use assembler::{PhraseAssembler, TaggedToken, opens_phrase};
pub use classifier::{Classifier, OpenClassTagger, SuffixTagger, TaggerError};
pub use lexicon::Lexicon;
pub use parser::{Analysis, ParserConfig, SyntaxParser};
pub use tokenizer::{SentenceTokenizer, Token};
