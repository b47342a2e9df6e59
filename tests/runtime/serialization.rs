//! Integration tests for tree exports

use syntree_foundation::{LanguageCode, TreeNode};
use syntree_parser::{ParserConfig, SyntaxParser};
use syntree_runtime::serialize::{Format, export, from_bytes, from_json, import, to_bytes, to_json};

fn parsed(language: LanguageCode, sentence: &str) -> TreeNode {
    SyntaxParser::new(ParserConfig::default().with_language(language).with_seed(3))
        .parse(sentence)
        .unwrap()
}

#[test]
fn parsed_trees_survive_json() {
    for (language, sentence) in [
        (LanguageCode::English, "the big dog runs quickly"),
        (LanguageCode::Kazakh, "мен кітап оқу"),
    ] {
        let tree = parsed(language, sentence);
        assert_eq!(from_json(&to_json(&tree).unwrap()).unwrap(), tree);
    }
}

#[test]
fn parsed_trees_survive_messagepack() {
    let tree = parsed(LanguageCode::Spanish, "el gato come en la casa");
    assert_eq!(from_bytes(&to_bytes(&tree).unwrap()).unwrap(), tree);
}

#[test]
fn json_is_the_record_shape() {
    let tree = parsed(LanguageCode::English, "the cat runs");
    let value: serde_json::Value = serde_json::from_str(&to_json(&tree).unwrap()).unwrap();

    assert_eq!(value["id"], tree.id.as_str());
    assert_eq!(value["label"], "S");
    assert_eq!(value["type"], "SENTENCE");
    assert_eq!(value["metadata"]["language"], "en");
    let vp = &value["children"][1];
    assert_eq!(vp["type"], "VP");
    assert_eq!(vp["children"][0]["value"], "runs");
    assert_eq!(vp["children"][0]["metadata"]["pos"], "VERB");
}

#[test]
fn text_export_is_indented() {
    let tree = parsed(LanguageCode::English, "the cat runs");
    let text = String::from_utf8(export(&tree, Format::Text).unwrap()).unwrap();
    assert_eq!(
        text,
        "SENTENCE\n  NP\n    DET: the\n    NOUN: cat\n  VP\n    VERB: runs\n"
    );
    assert!(import(text.as_bytes(), Format::Text).is_err());
}

#[test]
fn binary_is_smaller_than_json() {
    let tree = parsed(LanguageCode::English, "the big cat quickly runs in my house");
    let json = export(&tree, Format::Json).unwrap();
    let binary = export(&tree, Format::MessagePack).unwrap();
    assert!(binary.len() < json.len());
}
