//! Integration tests for tree edits

use syntree_editor::{NodePatch, TreeEditor, add_node, move_node, remove_node, update_node};
use syntree_foundation::{
    ErrorKind, NodeId, NodeIdGenerator, PhraseTag, PosTag, Tag, TreeNode,
};
use syntree_parser::{ParserConfig, SyntaxParser};

fn parsed() -> TreeNode {
    SyntaxParser::new(ParserConfig::default().with_seed(7))
        .parse("the cat runs")
        .unwrap()
}

fn child_id(tree: &TreeNode, index: usize) -> NodeId {
    tree.children[index].id.clone()
}

// =============================================================================
// Add
// =============================================================================

#[test]
fn add_appends_last_child() {
    let tree = parsed();
    let np = child_id(&tree, 0);
    let mut ids = NodeIdGenerator::seeded(1);

    let (updated, id) = add_node(&tree, &np, "big", PosTag::Adj, &mut ids).unwrap();
    let np_node = updated.find(&np).unwrap();
    assert_eq!(np_node.children.len(), 3);
    assert_eq!(np_node.children[2].id, id);
    assert_eq!(np_node.children[2].tag, Tag::Pos(PosTag::Adj));
    assert_eq!(tree.node_count() + 1, updated.node_count());
}

#[test]
fn add_avoids_colliding_ids() {
    // Same seed as the parser, so the first ids drawn already exist.
    let tree = parsed();
    let mut editor = TreeEditor::seeded(7);
    let (updated, id) = editor
        .add_node(&tree, &tree.id, "PP", PhraseTag::Pp)
        .unwrap();
    assert!(!tree.contains(&id));
    assert!(updated.contains(&id));
}

#[test]
fn add_under_missing_parent_fails() {
    let tree = parsed();
    let err = add_node(
        &tree,
        &NodeId::new("nope"),
        "x",
        PosTag::Noun,
        &mut NodeIdGenerator::seeded(0),
    )
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NodeNotFound(_)));
}

// =============================================================================
// Remove
// =============================================================================

#[test]
fn remove_drops_the_whole_subtree() {
    let tree = parsed();
    let np = child_id(&tree, 0);
    let updated = remove_node(&tree, &np).unwrap();
    assert_eq!(updated.child_tags(), vec![Tag::Phrase(PhraseTag::Vp)]);
    assert_eq!(updated.node_count(), tree.node_count() - 3);
}

#[test]
fn root_cannot_be_removed() {
    let tree = parsed();
    let before = tree.clone();
    let err = remove_node(&tree, &tree.id).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::CannotRemoveRoot(_)));
    assert_eq!(tree, before);
}

// =============================================================================
// Update
// =============================================================================

#[test]
fn update_changes_only_patched_fields() {
    let tree = parsed();
    let cat = tree.iter().find(|n| n.label == "cat").unwrap().id.clone();
    let updated = update_node(&tree, &cat, &NodePatch::new().label("dog").value("dog")).unwrap();

    let node = updated.find(&cat).unwrap();
    assert_eq!(node.label, "dog");
    assert_eq!(node.value.as_deref(), Some("dog"));
    assert_eq!(node.tag, Tag::Pos(PosTag::Noun));
    assert_eq!(node.metadata, tree.find(&cat).unwrap().metadata);
}

#[test]
fn update_missing_node_fails() {
    let err = update_node(&parsed(), &NodeId::new("ghost"), &NodePatch::new()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NodeNotFound(_)));
}

// =============================================================================
// Move
// =============================================================================

#[test]
fn move_reparents_a_subtree() {
    let tree = parsed();
    let np = child_id(&tree, 0);
    let vp = child_id(&tree, 1);

    let updated = move_node(&tree, &np, &vp).unwrap();
    assert_eq!(updated.children.len(), 1);
    let vp_node = updated.find(&vp).unwrap();
    assert_eq!(vp_node.children.len(), 2);
    assert_eq!(vp_node.children[1].id, np);
    assert_eq!(updated.node_count(), tree.node_count());
}

#[test]
fn move_into_own_subtree_is_invalid() {
    let tree = parsed();
    let np = child_id(&tree, 0);
    let det = tree.children[0].children[0].id.clone();

    for target in [&np, &det] {
        let err = move_node(&tree, &np, target).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidMove { .. }));
    }
}

#[test]
fn move_root_is_rejected() {
    let tree = parsed();
    let vp = child_id(&tree, 1);
    let err = move_node(&tree, &tree.id, &vp).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::CannotRemoveRoot(_)));
}

#[test]
fn move_with_missing_ids_fails() {
    let tree = parsed();
    let np = child_id(&tree, 0);
    let ghost = NodeId::new("ghost");
    assert!(matches!(
        move_node(&tree, &ghost, &np).unwrap_err().kind,
        ErrorKind::NodeNotFound(_)
    ));
    assert!(matches!(
        move_node(&tree, &np, &ghost).unwrap_err().kind,
        ErrorKind::NodeNotFound(_)
    ));
}
