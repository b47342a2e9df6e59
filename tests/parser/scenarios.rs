//! End-to-end parsing scenarios

use syntree_foundation::{
    ErrorCode, ErrorKind, LanguageCode, NodeIdGenerator, PhraseTag, PosTag, Tag, TreeNode,
    ValidationError,
};
use syntree_parser::{Classifier, ParserConfig, PhraseAssembler, SyntaxParser};

fn english() -> SyntaxParser {
    SyntaxParser::new(ParserConfig::default().with_seed(42))
}

fn shape(node: &TreeNode) -> Vec<(Tag, Vec<Tag>)> {
    node.children
        .iter()
        .map(|phrase| (phrase.tag.clone(), phrase.child_tags()))
        .collect()
}

#[test]
fn simple_sentence_parses_cleanly() {
    let analysis = english().analyze("the cat runs").unwrap();
    assert_eq!(
        shape(&analysis.tree),
        vec![
            (
                Tag::Phrase(PhraseTag::Np),
                vec![Tag::Pos(PosTag::Det), Tag::Pos(PosTag::Noun)]
            ),
            (Tag::Phrase(PhraseTag::Vp), vec![Tag::Pos(PosTag::Verb)]),
        ]
    );
    assert!(analysis.findings.is_empty());

    let words: Vec<&str> = analysis
        .tree
        .iter()
        .filter_map(|n| n.value.as_deref())
        .collect();
    assert_eq!(words, ["the", "cat", "runs"]);
}

#[test]
fn lone_verb_is_missing_its_subject() {
    let analysis = english().analyze("runs").unwrap();
    assert_eq!(
        shape(&analysis.tree),
        vec![(Tag::Phrase(PhraseTag::Vp), vec![Tag::Pos(PosTag::Verb)])]
    );
    let missing: Vec<&ValidationError> = analysis
        .findings
        .iter()
        .filter(|f| f.code == ErrorCode::MissingRequiredPhrase)
        .collect();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].details.phrase_type, Some(Tag::Phrase(PhraseTag::Np)));
}

#[test]
fn unknown_words_still_assemble() {
    let classifier = Classifier::standard();
    assert_eq!(classifier.classify("xyzzy", LanguageCode::English), PosTag::Unknown);

    let analysis = english().analyze("xyzzy plugh").unwrap();
    assert_eq!(analysis.tree.children.len(), 2);
    for phrase in &analysis.tree.children {
        assert_eq!(phrase.tag, Tag::Pos(PosTag::Unknown));
        assert_eq!(phrase.children.len(), 1);
        assert!(
            analysis.findings.iter().any(|f| {
                f.code == ErrorCode::UnknownPhraseType
                    && f.details.node_id.as_ref() == Some(&phrase.id)
            }),
            "no finding for {}",
            phrase.id
        );
    }
}

#[test]
fn empty_token_stream_is_rejected() {
    let err = PhraseAssembler::new()
        .assemble(&[], &mut NodeIdGenerator::seeded(0))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyInput));
}

#[test]
fn punctuation_only_sentence_is_empty() {
    let err = english().parse("?! ...").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyInput));
    assert_eq!(err.to_findings()[0].code, ErrorCode::ParsingError);
}

#[test]
fn prepositions_open_their_own_phrase() {
    let tree = english().parse("the dog sleeps under tree").unwrap();
    assert_eq!(
        tree.child_tags(),
        vec![
            Tag::Phrase(PhraseTag::Np),
            Tag::Phrase(PhraseTag::Vp),
            Tag::Phrase(PhraseTag::Pp)
        ]
    );
}

#[test]
fn validated_parse_fails_with_all_findings() {
    let err = english().parse_validated("runs quickly").unwrap_err();
    match err.kind {
        ErrorKind::Validation(findings) => assert!(!findings.is_empty()),
        other => panic!("expected validation error, got {other:?}"),
    }
}
