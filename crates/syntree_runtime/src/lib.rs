//! REPL, CLI, serialization, and cached tagging for syntree.
//!
//! This crate provides:
//! - [`Session`] - Current tree, undo history, and `:command` handling
//! - [`Repl`] - Interactive loop over a [`LineEditor`]
//! - [`serialize`] - JSON, `MessagePack`, and text exports
//! - [`CachedTagger`] - Response cache and pacing for open-class taggers
//! - [`setup_logging`] - stderr diagnostics for the CLI

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod logging;
pub mod repl;
pub mod serialize;
pub mod session;
pub mod tagger;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use logging::setup_logging;
pub use repl::Repl;
pub use serialize::{Format, load_from_file, save_to_file};
pub use session::{OutputFormat, Reply, Session, SessionConfig, render_findings};
pub use tagger::{CachedTagger, TaggerConfig, TaggerStats};
