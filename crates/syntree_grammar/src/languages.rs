//! Built-in grammars for the supported languages.
//!
//! English, Spanish and Russian are subject-verb languages and share the
//! phrase order `NP VP PP AP ADVP`; Russian noun phrases admit one more
//! child. Kazakh is verb-final, so its verb phrase closes the order, and its
//! postpositions may sit in noun and postpositional phrases.

use syntree_foundation::{LanguageCode, PhraseTag, PosTag};

use crate::grammar::{LanguageGrammar, PhraseRule};

/// Returns the built-in grammar for a language.
#[must_use]
pub fn grammar_for(language: LanguageCode) -> LanguageGrammar {
    match language {
        LanguageCode::English | LanguageCode::Spanish => subject_verb(language, 4),
        LanguageCode::Russian => subject_verb(language, 5),
        LanguageCode::Kazakh => kazakh(),
    }
}

const NOMINAL: [PosTag; 5] = [
    PosTag::Det,
    PosTag::Adj,
    PosTag::Noun,
    PosTag::Pron,
    PosTag::Num,
];

fn verbal_rule() -> PhraseRule {
    PhraseRule::new(1, 3).allowing([PosTag::Verb, PosTag::Aux, PosTag::Adv])
}

fn adjectival_rule() -> PhraseRule {
    PhraseRule::new(1, 2).allowing([PosTag::Adj, PosTag::Adv])
}

fn adverbial_rule() -> PhraseRule {
    PhraseRule::new(1, 2).allowing([PosTag::Adv])
}

fn subject_verb(language: LanguageCode, max_np: usize) -> LanguageGrammar {
    LanguageGrammar::new(language)
        .with_order([
            PhraseTag::Np,
            PhraseTag::Vp,
            PhraseTag::Pp,
            PhraseTag::Ap,
            PhraseTag::Advp,
        ])
        .with_required([PhraseTag::Np, PhraseTag::Vp])
        .with_optional([PhraseTag::Pp, PhraseTag::Ap, PhraseTag::Advp])
        .with_rule(PhraseTag::Np, PhraseRule::new(1, max_np).allowing(NOMINAL))
        .with_rule(PhraseTag::Vp, verbal_rule())
        .with_rule(
            PhraseTag::Pp,
            PhraseRule::new(1, 4)
                .allowing([PosTag::Prep])
                .allowing(NOMINAL),
        )
        .with_rule(PhraseTag::Ap, adjectival_rule())
        .with_rule(PhraseTag::Advp, adverbial_rule())
}

fn kazakh() -> LanguageGrammar {
    LanguageGrammar::new(LanguageCode::Kazakh)
        .with_order([
            PhraseTag::Np,
            PhraseTag::Pp,
            PhraseTag::Ap,
            PhraseTag::Advp,
            PhraseTag::Vp,
        ])
        .with_required([PhraseTag::Np, PhraseTag::Vp])
        .with_optional([PhraseTag::Pp, PhraseTag::Ap, PhraseTag::Advp])
        .with_rule(
            PhraseTag::Np,
            PhraseRule::new(1, 4)
                .allowing(NOMINAL)
                .allowing([PosTag::Post]),
        )
        .with_rule(PhraseTag::Vp, verbal_rule())
        .with_rule(
            PhraseTag::Pp,
            PhraseRule::new(1, 4)
                .allowing(NOMINAL)
                .allowing([PosTag::Post]),
        )
        .with_rule(PhraseTag::Ap, adjectival_rule())
        .with_rule(PhraseTag::Advp, adverbial_rule())
}
