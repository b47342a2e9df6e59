//! Sentence tokenization.
//!
//! Splits a raw sentence on whitespace into word tokens. Sentence
//! punctuation is stripped; apostrophes and hyphens inside a word are kept.
//! Case is preserved so terminals show the word as it was typed.

/// A word from the input sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The word as typed, minus surrounding punctuation.
    pub text: String,
    /// Zero-based index of the token in the sentence.
    pub position: usize,
}

/// Tokenizes input sentences.
pub struct SentenceTokenizer;

impl SentenceTokenizer {
    /// Tokenizes a raw sentence into word tokens.
    ///
    /// - Splits on any Unicode whitespace
    /// - Strips `. , ! ? ; :` and quotes anywhere in a word
    /// - Drops words that were nothing but punctuation
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<Token> {
        input
            .split_whitespace()
            .map(Self::clean_word)
            .filter(|word| !word.is_empty())
            .enumerate()
            .map(|(position, text)| Token { text, position })
            .collect()
    }

    fn clean_word(raw: &str) -> String {
        let kept: String = raw.chars().filter(|c| !is_stripped(*c)).collect();
        // Quote-like marks only survive between letters.
        kept.trim_matches(|c: char| c == '\'' || c == '-')
            .to_string()
    }
}

fn is_stripped(c: char) -> bool {
    matches!(
        c,
        '.' | ',' | '!' | '?' | ';' | ':' | '"' | '(' | ')' | '«' | '»' | '¿' | '¡' | '…'
    )
}
