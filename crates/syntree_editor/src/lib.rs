//! Immutable tree editing for syntree.
//!
//! Every operation takes a tree and returns a new one; the argument is never
//! touched, and a failed operation leaves nothing half-done. Only the path
//! from the edited node to the root is rebuilt; every other subtree is shared
//! with the original.
//!
//! - [`add_node`] - Append a fresh node under a parent
//! - [`remove_node`] - Delete a subtree
//! - [`update_node`] - Apply a [`NodePatch`]
//! - [`move_node`] - Reattach a subtree under a new parent
//! - [`TreeEditor`] - Owns the id generator for a sequence of edits

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod edit;
pub mod patch;

pub use edit::{TreeEditor, add_node, move_node, remove_node, update_node};
pub use patch::NodePatch;
