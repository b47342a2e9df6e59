//! Integration tests for the language grammar table

use syntree_foundation::{ErrorKind, LanguageCode, PhraseTag, PosTag, Tag};
use syntree_grammar::{GrammarRegistry, LanguageGrammar, PhraseRule, grammar_for};

#[test]
fn every_language_has_a_grammar() {
    let registry = GrammarRegistry::standard();
    for language in LanguageCode::ALL {
        let grammar = registry.get(language).unwrap();
        assert_eq!(grammar.language(), language);
        assert_eq!(
            grammar.required_phrases(),
            &[PhraseTag::Np, PhraseTag::Vp],
            "{language}"
        );
    }
}

#[test]
fn kazakh_is_verb_final() {
    let grammar = grammar_for(LanguageCode::Kazakh);
    assert_eq!(grammar.phrase_order().last(), Some(&PhraseTag::Vp));
    assert!(grammar
        .allowed_child_types(PhraseTag::Pp)
        .contains(&Tag::Pos(PosTag::Post)));
}

#[test]
fn russian_noun_phrases_are_longer() {
    let russian = grammar_for(LanguageCode::Russian);
    let english = grammar_for(LanguageCode::English);
    assert_eq!(russian.child_count_bounds(PhraseTag::Np), (1, 5));
    assert_eq!(english.child_count_bounds(PhraseTag::Np), (1, 4));
}

#[test]
fn unregistered_language_fails() {
    let registry = GrammarRegistry::new();
    let err = registry.get(LanguageCode::Spanish).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnsupportedLanguage(_)));
}

#[test]
fn custom_grammar_replaces_builtin() {
    let mut registry = GrammarRegistry::standard();
    registry.register(
        LanguageGrammar::new(LanguageCode::English)
            .with_order([PhraseTag::Vp, PhraseTag::Np])
            .with_required([PhraseTag::Vp])
            .with_rule(PhraseTag::Vp, PhraseRule::new(1, 1).allowing([PosTag::Verb])),
    );
    let grammar = registry.get(LanguageCode::English).unwrap();
    assert_eq!(grammar.order_index(PhraseTag::Vp), Some(0));
    assert_eq!(grammar.rule(PhraseTag::Np), None);
    assert_eq!(registry.languages().len(), 4);
}
