//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: TreeNode, Tag, LanguageCode, Error, and findings.

mod errors;
mod tree;
