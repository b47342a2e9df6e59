//! Property tests for the parse pipeline

use std::collections::HashSet;

use proptest::prelude::*;
use syntree_foundation::{LanguageCode, Tag};
use syntree_parser::{ParserConfig, SyntaxParser};

const WORDS: &[&str] = &[
    "the", "a", "cat", "dogs", "runs", "is", "big", "quickly", "in", "under", "she", "and",
    "will", "xyzzy", "book", "slowly", "my",
];

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 1..12).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn ids_are_unique(sentence in sentence(), seed in any::<u64>()) {
        let mut parser = SyntaxParser::new(ParserConfig::default().with_seed(seed));
        let tree = parser.parse(&sentence).unwrap();
        let ids = tree.ids();
        let unique: HashSet<_> = ids.iter().collect();
        prop_assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn every_word_becomes_one_terminal(sentence in sentence()) {
        let mut parser = SyntaxParser::default();
        let tree = parser.parse(&sentence).unwrap();
        let words: Vec<&str> = tree.iter().filter_map(|n| n.value.as_deref()).collect();
        let expected: Vec<&str> = sentence.split(' ').collect();
        prop_assert_eq!(words, expected);
    }

    #[test]
    fn trees_are_three_levels_deep(sentence in sentence()) {
        let tree = SyntaxParser::default().parse(&sentence).unwrap();
        prop_assert_eq!(&tree.tag, &Tag::Sentence);
        for phrase in &tree.children {
            prop_assert!(!phrase.children.is_empty());
            for terminal in &phrase.children {
                prop_assert!(terminal.is_terminal());
                prop_assert!(terminal.children.is_empty());
            }
        }
    }

    #[test]
    fn same_seed_same_tree(sentence in sentence(), seed in any::<u64>()) {
        let config = ParserConfig::default()
            .with_language(LanguageCode::English)
            .with_seed(seed);
        let a = SyntaxParser::new(config.clone()).parse(&sentence).unwrap();
        let b = SyntaxParser::new(config).parse(&sentence).unwrap();
        prop_assert_eq!(a, b);
    }
}
