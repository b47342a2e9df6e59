//! Integration tests for tree values, tags, and languages

use std::str::FromStr;

use syntree_foundation::{
    LanguageCode, NodeId, NodeIdGenerator, PhraseTag, PosTag, Tag, TreeNode, render_text,
};

fn sample() -> TreeNode {
    TreeNode::new("s", "S", Tag::Sentence)
        .with_child(
            TreeNode::new("np", "NP", PhraseTag::Np)
                .with_child(TreeNode::terminal("w0", "the", PosTag::Det))
                .with_child(TreeNode::terminal("w1", "cat", PosTag::Noun)),
        )
        .with_child(
            TreeNode::new("vp", "VP", PhraseTag::Vp)
                .with_child(TreeNode::terminal("w2", "runs", PosTag::Verb)),
        )
}

// =============================================================================
// Tree Queries
// =============================================================================

#[test]
fn preorder_ids() {
    let ids: Vec<String> = sample().ids().iter().map(|id| id.to_string()).collect();
    assert_eq!(ids, ["s", "np", "w0", "w1", "vp", "w2"]);
}

#[test]
fn find_and_count() {
    let tree = sample();
    assert_eq!(tree.node_count(), 6);
    assert_eq!(tree.find(&NodeId::new("w1")).map(|n| n.label.as_str()), Some("cat"));
    assert!(!tree.contains(&NodeId::new("missing")));
}

#[test]
fn terminals_carry_their_word() {
    let tree = sample();
    let terminals: Vec<&str> = tree
        .iter()
        .filter(|n| n.is_terminal())
        .filter_map(|n| n.value.as_deref())
        .collect();
    assert_eq!(terminals, ["the", "cat", "runs"]);
}

#[test]
fn builders_do_not_touch_the_original() {
    let tree = sample();
    let bigger = tree
        .clone()
        .with_child(TreeNode::new("pp", "PP", PhraseTag::Pp));
    assert_eq!(tree.children.len(), 2);
    assert_eq!(bigger.children.len(), 3);
}

#[test]
fn text_rendering() {
    assert_eq!(
        render_text(&sample()),
        "SENTENCE\n  NP\n    DET: the\n    NOUN: cat\n  VP\n    VERB: runs\n"
    );
}

// =============================================================================
// Tags and Languages
// =============================================================================

#[test]
fn tag_spellings_round_trip() {
    for pos in PosTag::ALL {
        assert_eq!(Tag::parse(pos.as_str()), Tag::Pos(pos));
    }
    for phrase in PhraseTag::ALL {
        assert_eq!(Tag::parse(phrase.as_str()), Tag::Phrase(phrase));
    }
    assert_eq!(Tag::parse("SENTENCE"), Tag::Sentence);
}

#[test]
fn foreign_tags_are_preserved() {
    let tag = Tag::parse("np");
    assert_eq!(tag, Tag::Other("np".to_string()));
    assert!(!tag.is_known());
    assert_eq!(tag.to_string(), "np");
}

#[test]
fn languages_parse_from_code_or_name() {
    assert_eq!(LanguageCode::from_str("kk").unwrap(), LanguageCode::Kazakh);
    assert_eq!(LanguageCode::from_str("Russian").unwrap(), LanguageCode::Russian);
    assert!(LanguageCode::from_str("fr").is_err());
}

// =============================================================================
// Id Generation
// =============================================================================

#[test]
fn seeded_ids_repeat() {
    let mut a = NodeIdGenerator::seeded(11);
    let mut b = NodeIdGenerator::seeded(11);
    for _ in 0..10 {
        assert_eq!(a.next_id(), b.next_id());
    }
}

#[test]
fn ids_look_like_uuids() {
    let id = NodeIdGenerator::seeded(0).next_id();
    let parts: Vec<usize> = id.as_str().split('-').map(str::len).collect();
    assert_eq!(parts, [8, 4, 4, 4, 12]);
    assert_eq!(id.as_str().chars().nth(14), Some('4'));
}
