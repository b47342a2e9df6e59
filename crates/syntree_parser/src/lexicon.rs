//! Per-language word lists.
//!
//! A [`Lexicon`] is an ordered list of `(tag, words)` entries. Lookup is
//! case-insensitive and the first entry containing the word wins, so a word
//! listed under two tags (English "her", Kazakh "мен") always resolves to
//! the earlier one.
//!
//! The built-in lexicons carry the closed classes and a small seed list of
//! open-class words for each supported language.

use syntree_foundation::{LanguageCode, PosTag};

/// An ordered word list for one language.
#[derive(Clone, Debug)]
pub struct Lexicon {
    language: LanguageCode,
    entries: Vec<(PosTag, Vec<String>)>,
}

impl Lexicon {
    /// Creates an empty lexicon.
    #[must_use]
    pub fn new(language: LanguageCode) -> Self {
        Self {
            language,
            entries: Vec::new(),
        }
    }

    /// Returns the built-in lexicon for a language.
    #[must_use]
    pub fn standard(language: LanguageCode) -> Self {
        let table = match language {
            LanguageCode::English => ENGLISH,
            LanguageCode::Spanish => SPANISH,
            LanguageCode::Russian => RUSSIAN,
            LanguageCode::Kazakh => KAZAKH,
        };
        table
            .iter()
            .fold(Self::new(language), |lexicon, (tag, words)| {
                lexicon.with_entry(*tag, words.iter().copied())
            })
    }

    /// Builder method to append an entry. Words are stored lowercased.
    #[must_use]
    pub fn with_entry<I, S>(mut self, tag: PosTag, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        self.entries.push((tag, words));
        self
    }

    /// The language this lexicon covers.
    #[must_use]
    pub const fn language(&self) -> LanguageCode {
        self.language
    }

    /// Looks up a word, ignoring case.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<PosTag> {
        let word = word.to_lowercase();
        self.lookup_lowercase(&word)
    }

    /// Looks up a word that is already lowercase.
    #[must_use]
    pub fn lookup_lowercase(&self, word: &str) -> Option<PosTag> {
        self.entries
            .iter()
            .find(|(_, words)| words.iter().any(|w| w == word))
            .map(|(tag, _)| *tag)
    }

    /// Number of distinct words across all entries.
    #[must_use]
    pub fn word_count(&self) -> usize {
        let mut words: Vec<&str> = self
            .entries
            .iter()
            .flat_map(|(_, words)| words.iter().map(String::as_str))
            .collect();
        words.sort_unstable();
        words.dedup();
        words.len()
    }
}

type Table = &'static [(PosTag, &'static [&'static str])];

const ENGLISH: Table = &[
    (
        PosTag::Det,
        &[
            "the", "a", "an", "this", "that", "these", "those", "my", "your", "his", "her",
        ],
    ),
    (
        PosTag::Noun,
        &[
            "cat", "dog", "book", "tree", "house", "car", "computer", "phone", "person", "city",
        ],
    ),
    (
        PosTag::Verb,
        &[
            "is", "are", "was", "were", "run", "jump", "eat", "sleep", "write", "read", "walk",
            "talk",
        ],
    ),
    (
        PosTag::Adj,
        &[
            "big", "small", "red", "blue", "fast", "slow", "happy", "sad", "good", "bad",
        ],
    ),
    (
        PosTag::Pron,
        &[
            "i", "you", "he", "she", "it", "we", "they", "me", "him", "her",
        ],
    ),
    (
        PosTag::Prep,
        &[
            "in", "on", "at", "with", "by", "for", "to", "from", "under", "over",
        ],
    ),
    (
        PosTag::Conj,
        &["and", "or", "but", "because", "if", "when", "while"],
    ),
    (
        PosTag::Adv,
        &[
            "quickly", "slowly", "well", "badly", "very", "really", "always", "never",
        ],
    ),
    (
        PosTag::Aux,
        &[
            "will", "would", "can", "could", "should", "must", "may", "might",
        ],
    ),
];

const SPANISH: Table = &[
    (
        PosTag::Det,
        &[
            "el", "la", "los", "las", "un", "una", "unos", "unas", "este", "esta",
        ],
    ),
    (
        PosTag::Noun,
        &[
            "gato",
            "perro",
            "libro",
            "árbol",
            "casa",
            "coche",
            "computadora",
            "teléfono",
        ],
    ),
    (
        PosTag::Verb,
        &[
            "es", "son", "era", "estar", "corre", "salta", "come", "duerme",
        ],
    ),
    (
        PosTag::Adj,
        &[
            "grande", "pequeño", "rojo", "azul", "rápido", "lento", "feliz", "triste",
        ],
    ),
    (
        PosTag::Pron,
        &[
            "yo", "tú", "él", "ella", "nosotros", "vosotros", "ellos", "ellas",
        ],
    ),
    (
        PosTag::Prep,
        &["en", "sobre", "con", "por", "para", "de", "a", "desde"],
    ),
    (
        PosTag::Conj,
        &["y", "o", "pero", "porque", "si", "cuando", "mientras"],
    ),
    (
        PosTag::Adv,
        &[
            "rápidamente",
            "lentamente",
            "bien",
            "mal",
            "muy",
            "siempre",
            "nunca",
        ],
    ),
];

// "потому что" is a two-word conjunction; only its parts can reach lookup.
const RUSSIAN: Table = &[
    (
        PosTag::Noun,
        &[
            "кошка", "собака", "книга", "дерево", "дом", "машина", "компьютер", "телефон",
        ],
    ),
    (
        PosTag::Verb,
        &[
            "есть", "быть", "бежать", "прыгать", "спать", "писать", "читать",
        ],
    ),
    (
        PosTag::Adj,
        &[
            "большой",
            "маленький",
            "красный",
            "синий",
            "быстрый",
            "медленный",
            "счастливый",
        ],
    ),
    (
        PosTag::Pron,
        &["я", "ты", "он", "она", "оно", "мы", "вы", "они"],
    ),
    (
        PosTag::Prep,
        &["в", "на", "с", "у", "к", "от", "из", "под"],
    ),
    (
        PosTag::Conj,
        &["и", "или", "но", "потому", "что", "если", "когда", "пока"],
    ),
    (
        PosTag::Adv,
        &[
            "быстро", "медленно", "хорошо", "плохо", "очень", "всегда", "никогда",
        ],
    ),
    (PosTag::Num, &["один", "два", "три", "четыре", "пять"]),
];

const KAZAKH: Table = &[
    (
        PosTag::Noun,
        &[
            "мысық", "ит", "кітап", "ағаш", "үй", "машина", "компьютер", "телефон",
        ],
    ),
    (
        PosTag::Verb,
        &["бар", "жүгіру", "секіру", "жеу", "ұйықтау", "жазу", "оқу"],
    ),
    (
        PosTag::Adj,
        &["үлкен", "кіші", "қызыл", "көк", "жылдам", "баяу", "бақытты"],
    ),
    (PosTag::Pron, &["мен", "сен", "ол", "біз", "сіз", "олар"]),
    (
        PosTag::Post,
        &["да", "де", "та", "те", "мен", "бен", "пен"],
    ),
    (
        PosTag::Conj,
        &["және", "немесе", "бірақ", "өйткені", "егер", "кезде"],
    ),
    (
        PosTag::Adv,
        &["жылдам", "баяу", "жақсы", "жаман", "өте", "әрқашан"],
    ),
    (PosTag::Num, &["бір", "екі", "үш", "төрт", "бес"]),
];
