//! Property tests for edit sequences on parsed trees

use std::collections::HashSet;

use proptest::prelude::*;
use syntree_editor::{NodePatch, add_node, move_node, remove_node, update_node};
use syntree_foundation::{NodeIdGenerator, PosTag, TreeNode};
use syntree_parser::{ParserConfig, SyntaxParser};

#[derive(Clone, Debug)]
enum Edit {
    Add(usize),
    Remove(usize),
    Move(usize, usize),
    Relabel(usize),
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        any::<usize>().prop_map(Edit::Add),
        any::<usize>().prop_map(Edit::Remove),
        (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Edit::Move(a, b)),
        any::<usize>().prop_map(Edit::Relabel),
    ]
}

fn tree(seed: u64) -> TreeNode {
    SyntaxParser::new(ParserConfig::default().with_seed(seed))
        .parse("the big cat quickly runs in my house")
        .unwrap()
}

fn has_unique_ids(tree: &TreeNode) -> bool {
    let ids = tree.ids();
    ids.iter().collect::<HashSet<_>>().len() == ids.len()
}

proptest! {
    #[test]
    fn any_edit_sequence_keeps_ids_unique(
        seed in any::<u64>(),
        edits in prop::collection::vec(edit(), 0..20),
    ) {
        let mut tree = tree(seed);
        // Reuse the parser's seed to force id collisions on add.
        let mut ids = NodeIdGenerator::seeded(seed);

        for edit in edits {
            let all = tree.ids();
            let pick = |i: usize| all[i % all.len()].clone();
            let before = tree.clone();
            let result = match edit {
                Edit::Add(p) => {
                    add_node(&tree, &pick(p), "w", PosTag::Noun, &mut ids).map(|(t, _)| t)
                }
                Edit::Remove(n) => remove_node(&tree, &pick(n)),
                Edit::Move(n, p) => move_node(&tree, &pick(n), &pick(p)),
                Edit::Relabel(n) => update_node(&tree, &pick(n), &NodePatch::new().label("x")),
            };
            match result {
                Ok(updated) => tree = updated,
                Err(_) => {
                    prop_assert_eq!(&tree, &before);
                }
            }
            prop_assert!(has_unique_ids(&tree));
        }
    }

    #[test]
    fn remove_undoes_add(seed in any::<u64>(), parent in any::<usize>()) {
        let tree = tree(seed);
        let all = tree.ids();
        let parent = &all[parent % all.len()];
        let (added, id) =
            add_node(&tree, parent, "new", PosTag::Adj, &mut NodeIdGenerator::seeded(seed)).unwrap();
        prop_assert_eq!(remove_node(&added, &id).unwrap(), tree);
    }

    #[test]
    fn moves_preserve_node_count(seed in any::<u64>(), node in any::<usize>(), parent in any::<usize>()) {
        let tree = tree(seed);
        let all = tree.ids();
        let node = &all[node % all.len()];
        let parent = &all[parent % all.len()];
        if let Ok(moved) = move_node(&tree, node, parent) {
            prop_assert_eq!(moved.node_count(), tree.node_count());
            prop_assert!(moved.contains(node));
        }
    }
}
