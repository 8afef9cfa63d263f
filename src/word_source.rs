use crate::info_log;
use crate::resources::{LoadError, parse_word_lines, read_resource};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::path::Path;

pub const EMBEDDED_START_WORDS: &str = include_str!("resources/start.txt");

/// Root word used when the list has nothing to offer.
pub const FALLBACK_ROOT_WORD: &str = "sensible";

/// The pool of root words a game can start from.
#[derive(Debug, Clone, Default)]
pub struct WordSource {
    words: Vec<String>,
}

impl WordSource {
    #[must_use]
    pub fn from_text(data: &str) -> Self {
        Self {
            words: parse_word_lines(data).collect(),
        }
    }

    /// # Errors
    ///
    /// Returns [`LoadError`] if the file cannot be read. Callers treat this as fatal.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let source = Self::from_text(&read_resource(&path)?);
        info_log!(
            "Loaded {} root words from {}",
            source.len(),
            path.as_ref().display()
        );
        Ok(source)
    }

    #[must_use]
    pub fn embedded() -> Self {
        Self::from_text(EMBEDDED_START_WORDS)
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Choose a root word uniformly at random, or [`FALLBACK_ROOT_WORD`] if the list is empty.
    pub fn pick_root_word<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let word = self
            .words
            .choose(rng)
            .map_or(FALLBACK_ROOT_WORD, String::as_str);
        info_log!("Picked root word '{}' from {} candidates", word, self.len());
        word.to_string()
    }
}
