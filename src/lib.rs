// Library interface for word-scramble
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod game_state;
pub mod logging;
pub mod resources;
pub mod tui;
pub mod validation;
pub mod word_source;

// Re-export commonly used items for easier testing
pub use dictionary::{DictionaryLookup, WordListDictionary};
pub use game_state::{GameInterface, GameState, Phase, Submission, UserAction, game_loop};
pub use resources::LoadError;
pub use validation::{Rejection, normalize, validate};
pub use word_source::WordSource;
