//! Integration tests for Layer 2: Parser
//!
//! Tests the sentence pipeline end to end: tokenize, classify, assemble,
//! validate.

mod properties;
mod scenarios;
