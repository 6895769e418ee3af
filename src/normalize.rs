//! Text normalization: lowercase, strip punctuation and digits, drop stop words.
//!
//! The stop-word and punctuation sets live in a [`Vocabulary`] that is built once and
//! injected into a [`Normalizer`]. Nothing here is global, so tests (or other languages)
//! can substitute their own vocabulary.

use std::collections::HashSet;
use std::sync::Arc;

/// Built-in Spanish function words. Never indexed, never matched.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "de", "la", "que", "el", "en", "y", "a", "los", "del", "se", "las", "por", "un", "para",
    "con", "no", "una", "su", "al", "lo", "como", "más", "pero", "sus", "le", "ya", "o",
];

/// Built-in punctuation characters stripped from every word.
pub const DEFAULT_PUNCTUATION: &str = "!¡\"#$%&'()*+,-./:;<=>?¿@[\\]^_`{|}~";

/// Stop words and punctuation used by a [`Normalizer`].
///
/// Stop words are always stored lowercased; every constructor (and deserialization)
/// goes through [`Vocabulary::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawVocabulary")
)]
pub struct Vocabulary {
    stop_words: HashSet<String>,
    punctuation: HashSet<char>,
}

/// Vocabulary as written in configuration, before stop words are lowercased.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawVocabulary {
    stop_words: Vec<String>,
    punctuation: Vec<char>,
}

#[cfg(feature = "serde")]
impl From<RawVocabulary> for Vocabulary {
    fn from(raw: RawVocabulary) -> Self {
        Self::new(raw.stop_words, raw.punctuation)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(
            DEFAULT_STOP_WORDS.iter().copied(),
            DEFAULT_PUNCTUATION.chars(),
        )
    }
}

impl Vocabulary {
    /// Build a vocabulary from arbitrary stop words and punctuation characters.
    ///
    /// Stop words are lowercased, since they are compared against lowercased text.
    pub fn new<S, P>(stop_words: S, punctuation: P) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        P: IntoIterator<Item = char>,
    {
        Self {
            stop_words: stop_words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            punctuation: punctuation.into_iter().collect(),
        }
    }

    /// A vocabulary with no stop words and no punctuation (digits are still stripped).
    pub fn empty() -> Self {
        Self {
            stop_words: HashSet::new(),
            punctuation: HashSet::new(),
        }
    }

    /// Copy of this vocabulary with a different stop-word list.
    pub fn with_stop_words<S>(&self, stop_words: S) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Self::new(stop_words, self.punctuation.iter().copied())
    }

    /// Copy of this vocabulary with a different punctuation set.
    pub fn with_punctuation<P>(&self, punctuation: P) -> Self
    where
        P: IntoIterator<Item = char>,
    {
        Self {
            stop_words: self.stop_words.clone(),
            punctuation: punctuation.into_iter().collect(),
        }
    }

    /// Words removed from the token stream (lowercased).
    pub fn stop_words(&self) -> &HashSet<String> {
        &self.stop_words
    }

    /// Characters removed from every word (exact membership, not a pattern).
    pub fn punctuation(&self) -> &HashSet<char> {
        &self.punctuation
    }

    /// Whether `word` is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Whether `c` is stripped during normalization.
    pub fn is_stripped(&self, c: char) -> bool {
        c.is_numeric() || self.punctuation.contains(&c)
    }
}

/// Turns raw text into an ordered list of tokens.
///
/// Cloning is cheap: the vocabulary is shared.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    vocab: Arc<Vocabulary>,
}

impl From<Vocabulary> for Normalizer {
    fn from(vocab: Vocabulary) -> Self {
        Self::new(vocab)
    }
}

impl Normalizer {
    /// Create a normalizer over `vocab`.
    pub fn new(vocab: Vocabulary) -> Self {
        Self {
            vocab: Arc::new(vocab),
        }
    }

    /// The vocabulary this normalizer applies.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Normalize `text` into tokens.
    ///
    /// - the whole text is lowercased, then split on whitespace (Unicode White_Space plus
    ///   the ASCII information separators U+001C..U+001F)
    /// - punctuation and numeric characters are removed from each chunk
    /// - stop words and chunks left empty are dropped
    ///
    /// Order and duplicates are preserved.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        lowered
            .split(is_separator)
            .filter(|chunk| !chunk.is_empty())
            .filter_map(|chunk| self.clean(chunk))
            .collect()
    }

    /// Clean one lowercased chunk; `None` when nothing indexable remains.
    fn clean(&self, chunk: &str) -> Option<String> {
        if self.vocab.is_stop_word(chunk) {
            return None;
        }
        let cleaned: String = chunk.chars().filter(|&c| !self.vocab.is_stripped(c)).collect();
        if cleaned.is_empty() || self.vocab.is_stop_word(&cleaned) {
            return None;
        }
        Some(cleaned)
    }
}

/// Word separator: Unicode whitespace and the information separators FS/GS/RS/US.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}
