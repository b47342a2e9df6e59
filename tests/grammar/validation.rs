//! Integration tests for tree validation

use proptest::prelude::*;
use syntree_foundation::{
    Detail, ErrorCode, ErrorKind, LanguageCode, PhraseTag, PosTag, Tag, TreeNode,
    ValidationError,
};
use syntree_grammar::{grammar_for, validate, validate_or_fail};

fn phrase(id: &str, tag: PhraseTag, words: &[(&str, PosTag)]) -> TreeNode {
    words
        .iter()
        .enumerate()
        .fold(TreeNode::new(id, tag.as_str(), tag), |node, (i, (word, pos))| {
            node.with_child(TreeNode::terminal(format!("{id}-{i}"), *word, *pos))
        })
}

fn sentence(children: Vec<TreeNode>) -> TreeNode {
    children
        .into_iter()
        .fold(TreeNode::new("root", "S", Tag::Sentence), TreeNode::with_child)
}

fn codes(findings: &[ValidationError]) -> Vec<ErrorCode> {
    findings.iter().map(|f| f.code).collect()
}

// =============================================================================
// Well-formed Trees
// =============================================================================

#[test]
fn simple_sentence_is_valid_in_every_subject_verb_language() {
    let tree = sentence(vec![
        phrase("np", PhraseTag::Np, &[("the", PosTag::Det), ("cat", PosTag::Noun)]),
        phrase("vp", PhraseTag::Vp, &[("runs", PosTag::Verb)]),
    ]);
    for language in [LanguageCode::English, LanguageCode::Spanish, LanguageCode::Russian] {
        assert!(validate(&tree, &grammar_for(language)).is_empty(), "{language}");
    }
}

#[test]
fn kazakh_puts_the_verb_phrase_last() {
    let tree = sentence(vec![
        phrase("np", PhraseTag::Np, &[("мен", PosTag::Pron)]),
        phrase("vp", PhraseTag::Vp, &[("оқу", PosTag::Verb)]),
        phrase("advp", PhraseTag::Advp, &[("өте", PosTag::Adv)]),
    ]);
    let findings = validate(&tree, &grammar_for(LanguageCode::Kazakh));
    assert_eq!(codes(&findings), vec![ErrorCode::InvalidPhraseOrder]);
    assert_eq!(findings[0].details.position, Some(2));
}

// =============================================================================
// Findings
// =============================================================================

#[test]
fn validator_reports_every_problem_at_once() {
    let tree = sentence(vec![
        phrase("vp", PhraseTag::Vp, &[("runs", PosTag::Verb)]),
        phrase("pp", PhraseTag::Pp, &[("on", PosTag::Prep)]),
        phrase("ap", PhraseTag::Ap, &[("big", PosTag::Adj), ("cat", PosTag::Noun)]),
        phrase("advp", PhraseTag::Advp, &[("very", PosTag::Adv)]),
        phrase("late", PhraseTag::Pp, &[("in", PosTag::Prep)]),
    ]);
    let findings = validate(&tree, &grammar_for(LanguageCode::English));
    let found = codes(&findings);

    assert!(found.contains(&ErrorCode::MissingRequiredPhrase));
    assert!(found.contains(&ErrorCode::InvalidPhraseOrder));
    assert!(found.contains(&ErrorCode::InvalidNodeType));

    let bad_child = findings
        .iter()
        .find(|f| f.code == ErrorCode::InvalidNodeType)
        .unwrap();
    assert_eq!(bad_child.details.position, Some(1));
    assert_eq!(bad_child.details.actual, Some(Detail::Tag(Tag::Pos(PosTag::Noun))));
}

#[test]
fn missing_phrases_are_reported_separately() {
    let tree = sentence(vec![phrase("ap", PhraseTag::Ap, &[("big", PosTag::Adj)])]);
    let findings = validate(&tree, &grammar_for(LanguageCode::English));
    let missing: Vec<Option<Tag>> = findings
        .iter()
        .filter(|f| f.code == ErrorCode::MissingRequiredPhrase)
        .map(|f| f.details.phrase_type.clone())
        .collect();
    assert_eq!(
        missing,
        vec![Some(Tag::Phrase(PhraseTag::Np)), Some(Tag::Phrase(PhraseTag::Vp))]
    );
}

#[test]
fn duplicate_ids_are_structural_findings() {
    let tree = sentence(vec![
        phrase("np", PhraseTag::Np, &[("cat", PosTag::Noun)]),
        phrase("np", PhraseTag::Vp, &[("runs", PosTag::Verb)]),
    ]);
    let findings = validate(&tree, &grammar_for(LanguageCode::English));
    assert!(codes(&findings).contains(&ErrorCode::InvalidTreeStructure));
}

#[test]
fn foreign_tags_are_unknown_phrase_types() {
    let tree = sentence(vec![
        phrase("np", PhraseTag::Np, &[("cat", PosTag::Noun)]),
        phrase("vp", PhraseTag::Vp, &[("runs", PosTag::Verb)]),
        TreeNode::new("x", "CLAUSE", Tag::parse("CLAUSE")),
    ]);
    let findings = validate(&tree, &grammar_for(LanguageCode::English));
    assert!(!findings.is_empty());
    assert!(findings.iter().all(|f| f.code == ErrorCode::UnknownPhraseType));
}

#[test]
fn validate_or_fail_carries_the_full_list() {
    let tree = sentence(vec![]);
    let grammar = grammar_for(LanguageCode::English);
    let err = validate_or_fail(&tree, &grammar).unwrap_err();
    match err.kind {
        ErrorKind::Validation(findings) => assert_eq!(findings, validate(&tree, &grammar)),
        other => panic!("expected validation error, got {other:?}"),
    }
}

// =============================================================================
// Properties
// =============================================================================

fn phrase_tag() -> impl Strategy<Value = PhraseTag> {
    prop::sample::select(PhraseTag::ALL.to_vec())
}

proptest! {
    /// A root holding every required phrase never reports one missing.
    #[test]
    fn required_phrases_present_means_none_missing(extra in prop::collection::vec(phrase_tag(), 0..6)) {
        let mut children = vec![
            phrase("np", PhraseTag::Np, &[("cat", PosTag::Noun)]),
            phrase("vp", PhraseTag::Vp, &[("runs", PosTag::Verb)]),
        ];
        for (i, tag) in extra.into_iter().enumerate() {
            children.push(TreeNode::new(format!("x{i}"), tag.as_str(), tag));
        }
        let findings = validate(&sentence(children), &grammar_for(LanguageCode::English));
        prop_assert!(!codes(&findings).contains(&ErrorCode::MissingRequiredPhrase));
    }

    /// Roots in canonical order never report an order finding.
    #[test]
    fn sorted_roots_are_in_order(mut tags in prop::collection::vec(phrase_tag(), 0..8)) {
        let grammar = grammar_for(LanguageCode::English);
        tags.sort_by_key(|tag| grammar.order_index(*tag));
        let children = tags
            .into_iter()
            .enumerate()
            .map(|(i, tag)| TreeNode::new(format!("x{i}"), tag.as_str(), tag))
            .collect();
        let findings = validate(&sentence(children), &grammar);
        prop_assert!(!codes(&findings).contains(&ErrorCode::InvalidPhraseOrder));
    }
}
