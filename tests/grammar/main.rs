//! Integration tests for Layer 1: Grammar
//!
//! Tests for the built-in language grammars and the tree validator.

mod grammars;
mod validation;
