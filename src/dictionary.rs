//! Spell-checking capability used by the validation pipeline.
//!
//! The game only needs a yes/no answer to "is this a real English word", so the
//! lookup sits behind [`DictionaryLookup`]. The shipped implementation is a word
//! list held in a `HashSet`; tests can pass a plain closure instead.

use crate::info_log;
use crate::resources::{LoadError, parse_word_lines, read_resource};
use std::collections::HashSet;
use std::path::Path;

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

pub trait DictionaryLookup {
    /// `word` is already normalized (lower-case, trimmed).
    fn is_real_word(&self, word: &str) -> bool;
}

impl<F> DictionaryLookup for F
where
    F: Fn(&str) -> bool,
{
    fn is_real_word(&self, word: &str) -> bool {
        self(word)
    }
}

impl DictionaryLookup for HashSet<String> {
    fn is_real_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    words: HashSet<String>,
}

impl WordListDictionary {
    #[must_use]
    pub fn from_text(data: &str) -> Self {
        Self {
            words: parse_word_lines(data).collect(),
        }
    }

    /// # Errors
    ///
    /// Returns [`LoadError`] if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let dictionary = Self::from_text(&read_resource(&path)?);
        info_log!(
            "Loaded {} dictionary words from {}",
            dictionary.len(),
            path.as_ref().display()
        );
        Ok(dictionary)
    }

    #[must_use]
    pub fn embedded() -> Self {
        Self::from_text(EMBEDDED_DICTIONARY)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryLookup for WordListDictionary {
    fn is_real_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
