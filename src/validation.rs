use crate::dictionary::DictionaryLookup;
use thiserror::Error;

pub const MIN_WORD_LENGTH: usize = 3;

/// Why a submitted word was turned down. Each variant is shown to the player
/// as a titled message and never ends the game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Try another combination")]
    DuplicateWord,
    #[error("You cannot have this word combination from '{root}'!")]
    InfeasibleWord { root: String },
    #[error("That is not a valid word.")]
    UnrecognizedWord,
    #[error("Words shorter than {min} letters are not allowed", min = MIN_WORD_LENGTH)]
    TooShort,
    #[error("That's the same as the root word!")]
    SameAsRoot,
}

impl Rejection {
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::DuplicateWord => "Word used already",
            Self::InfeasibleWord { .. } => "Word not possible",
            Self::UnrecognizedWord => "Word not recognized",
            Self::TooShort => "Word not allowed",
            Self::SameAsRoot => "Not allowed",
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Lower-case and trim raw input.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

#[must_use]
pub fn is_original(word: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used == word)
}

/// True if every letter of `word` can be taken from `root`, each root letter used at most once.
#[must_use]
pub fn is_possible(word: &str, root: &str) -> bool {
    let mut remaining: Vec<char> = root.chars().collect();
    for letter in word.chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(pos) => {
                remaining.swap_remove(pos);
            }
            None => return false,
        }
    }
    true
}

#[must_use]
pub fn is_long_enough(word: &str) -> bool {
    word.chars().count() >= MIN_WORD_LENGTH
}

#[must_use]
pub fn differs_from_root(word: &str, root: &str) -> bool {
    word != root
}

/// Run every check against an already normalized `word`, first failure wins.
///
/// The order is part of the game's behaviour: a duplicate is reported as a
/// duplicate even if it is also too short, and the root word itself is only
/// caught after it has passed the dictionary.
///
/// # Errors
///
/// Returns the [`Rejection`] of the first failing check.
pub fn validate<D: DictionaryLookup + ?Sized>(
    word: &str,
    root: &str,
    used_words: &[String],
    dictionary: &D,
) -> Result<String, Rejection> {
    if !is_original(word, used_words) {
        return Err(Rejection::DuplicateWord);
    }
    if !is_possible(word, root) {
        return Err(Rejection::InfeasibleWord {
            root: root.to_string(),
        });
    }
    if !dictionary.is_real_word(word) {
        return Err(Rejection::UnrecognizedWord);
    }
    if !is_long_enough(word) {
        return Err(Rejection::TooShort);
    }
    if !differs_from_root(word, root) {
        return Err(Rejection::SameAsRoot);
    }
    Ok(word.to_string())
}
