//! Integration tests for Error types
//!
//! Tests error construction, display, and rendering as findings.

use syntree_foundation::{
    Detail, Error, ErrorCode, ErrorContext, ErrorKind, NodeId, ValidationError,
};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_unsupported_language() {
    let err = Error::unsupported_language("fr");
    assert!(matches!(err.kind, ErrorKind::UnsupportedLanguage(_)));
    assert!(err.to_string().contains("fr"));
}

#[test]
fn error_node_not_found() {
    let err = Error::node_not_found(NodeId::new("abc"));
    assert!(matches!(err.kind, ErrorKind::NodeNotFound(_)));
    assert!(err.to_string().contains("abc"));
}

#[test]
fn error_with_context() {
    let err = Error::empty_input().with_context(
        ErrorContext::new()
            .with_source("   ")
            .with_frame("assemble"),
    );
    let context = err.context.as_ref().unwrap();
    assert_eq!(context.source.as_deref(), Some("   "));
    assert!(context.to_string().contains("assemble"));
}

// =============================================================================
// Errors as Findings
// =============================================================================

#[test]
fn input_errors_are_parsing_errors() {
    for err in [Error::empty_input(), Error::unsupported_language("xx")] {
        let findings = err.to_findings();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code, ErrorCode::ParsingError);
    }
}

#[test]
fn structural_errors_point_at_the_node() {
    let findings = Error::cannot_remove_root(NodeId::new("root")).to_findings();
    assert_eq!(findings[0].code, ErrorCode::InvalidTreeStructure);
    assert_eq!(findings[0].details.node_id, Some(NodeId::new("root")));

    let findings = Error::invalid_move(NodeId::new("np"), NodeId::new("w0")).to_findings();
    assert_eq!(findings[0].details.node_id, Some(NodeId::new("np")));
    assert_eq!(findings[0].details.actual, Some(Detail::Text("w0".to_string())));
}

#[test]
fn validation_errors_carry_their_findings() {
    let findings = vec![
        ValidationError::new(ErrorCode::MissingRequiredPhrase, "Missing required phrase: NP"),
        ValidationError::new(ErrorCode::InvalidPhraseOrder, "Phrase NP is out of order"),
    ];
    let err = Error::validation(findings.clone());
    assert_eq!(err.code(), ErrorCode::MissingRequiredPhrase);
    assert_eq!(err.to_findings(), findings);
    assert!(err.to_string().contains("2 finding(s)"));
}

#[test]
fn code_strings_are_stable() {
    let codes = [
        (ErrorCode::InvalidPhraseOrder, "INVALID_PHRASE_ORDER"),
        (ErrorCode::MissingRequiredPhrase, "MISSING_REQUIRED_PHRASE"),
        (ErrorCode::InvalidNodeType, "INVALID_NODE_TYPE"),
        (ErrorCode::InvalidChildrenCount, "INVALID_CHILDREN_COUNT"),
        (ErrorCode::UnknownPhraseType, "UNKNOWN_PHRASE_TYPE"),
        (ErrorCode::InvalidTreeStructure, "INVALID_TREE_STRUCTURE"),
        (ErrorCode::ParsingError, "PARSING_ERROR"),
    ];
    for (code, text) in codes {
        assert_eq!(code.to_string(), text);
    }
}
