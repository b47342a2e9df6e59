//! Integration tests for Layer 2: Editor
//!
//! Tests immutable tree edits on parsed sentences.

mod edits;
mod properties;
