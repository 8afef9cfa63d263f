use crate::dictionary::DictionaryLookup;
use crate::validation::{Rejection, normalize, validate};
use crate::word_source::WordSource;
use crate::{debug_log, info_log};
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    AwaitingInput,
    DisplayingError(Rejection),
}

/// Outcome of a submission that did not produce an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted { word: String, points: usize },
    /// Blank input: nothing happened.
    Ignored,
}

/// One game session: the root word, accepted words (newest first) and score.
#[derive(Debug, Clone)]
pub struct GameState {
    root_word: String,
    used_words: Vec<String>,
    score: usize,
    phase: Phase,
}

impl GameState {
    pub fn new<R: Rng + ?Sized>(source: &WordSource, rng: &mut R) -> Self {
        Self::with_root_word(source.pick_root_word(rng))
    }

    /// Start a session on a known root word.
    #[must_use]
    pub fn with_root_word(root_word: impl Into<String>) -> Self {
        Self {
            root_word: root_word.into(),
            used_words: Vec::new(),
            score: 0,
            phase: Phase::AwaitingInput,
        }
    }

    /// Pick a fresh root word and clear everything else. First launch and reset behave the same.
    pub fn start_or_reset<R: Rng + ?Sized>(&mut self, source: &WordSource, rng: &mut R) {
        *self = Self::new(source, rng);
        info_log!("New game started with root word '{}'", self.root_word);
    }

    /// Validate `raw` and record it on success.
    ///
    /// Blank input returns [`Submission::Ignored`] without touching any state.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] and moves to [`Phase::DisplayingError`]; the
    /// accepted words and score are left alone.
    pub fn submit<D: DictionaryLookup + ?Sized>(
        &mut self,
        raw: &str,
        dictionary: &D,
    ) -> Result<Submission, Rejection> {
        let candidate = normalize(raw);
        if candidate.is_empty() {
            debug_log!("submit() - Ignoring blank input");
            return Ok(Submission::Ignored);
        }

        match validate(&candidate, &self.root_word, &self.used_words, dictionary) {
            Ok(word) => {
                let points = word.chars().count();
                self.score += points;
                info_log!(
                    "Accepted '{}' for {} points, score now {}",
                    word,
                    points,
                    self.score
                );
                self.used_words.insert(0, word.clone());
                self.phase = Phase::AwaitingInput;
                Ok(Submission::Accepted { word, points })
            }
            Err(rejection) => {
                info_log!("Rejected '{}': {}", candidate, rejection.title());
                self.phase = Phase::DisplayingError(rejection.clone());
                Err(rejection)
            }
        }
    }

    /// Dismiss the current error, if any.
    pub fn acknowledge_error(&mut self) {
        self.phase = Phase::AwaitingInput;
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }
}

/// History label for an accepted word, e.g. `ball (4 letters)`.
#[must_use]
pub fn describe_word(word: &str) -> String {
    let count = word.chars().count();
    let unit = if count == 1 { "letter" } else { "letters" };
    format!("{word} ({count} {unit})")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Submit(String),
    Reset,
    Exit,
}

/// Front end seen by [`game_loop`]: renders state and collects player actions.
pub trait GameInterface {
    fn display_new_game(&mut self, state: &GameState);
    /// `None` means the input was not an action; ask again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_accepted(&mut self, word: &str, state: &GameState);
    /// Show the rejection and return once the player has dismissed it.
    fn acknowledge_rejection(&mut self, rejection: &Rejection, state: &GameState);
    fn display_exit_message(&mut self, state: &GameState);
}

/// Drive a session until the player exits, returning the final state.
pub fn game_loop<D, R, I>(
    source: &WordSource,
    dictionary: &D,
    rng: &mut R,
    interface: &mut I,
) -> GameState
where
    D: DictionaryLookup + ?Sized,
    R: Rng + ?Sized,
    I: GameInterface + ?Sized,
{
    let mut state = GameState::new(source, rng);
    info_log!("Game loop started with root word '{}'", state.root_word());
    interface.display_new_game(&state);

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };

        match action {
            UserAction::Exit => {
                interface.display_exit_message(&state);
                break;
            }
            UserAction::Reset => {
                state.start_or_reset(source, rng);
                interface.display_new_game(&state);
            }
            UserAction::Submit(raw) => match state.submit(&raw, dictionary) {
                Ok(Submission::Accepted { word, .. }) => interface.display_accepted(&word, &state),
                Ok(Submission::Ignored) => {}
                Err(rejection) => {
                    interface.acknowledge_rejection(&rejection, &state);
                    state.acknowledge_error();
                }
            },
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{HashSet, VecDeque};

    fn fixture(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    fn ballc_dictionary() -> HashSet<String> {
        fixture(&["ball", "allb", "call", "lab", "bc", "ballc", "cab"])
    }

    /// Scripted front end that records what it was asked to show.
    #[derive(Default)]
    struct ScriptedInterface {
        actions: VecDeque<Option<UserAction>>,
        new_games: Vec<String>,
        accepted: Vec<String>,
        rejections: Vec<Rejection>,
        exited: bool,
    }

    impl ScriptedInterface {
        fn new(actions: Vec<Option<UserAction>>) -> Self {
            Self {
                actions: actions.into(),
                ..Self::default()
            }
        }
    }

    impl GameInterface for ScriptedInterface {
        fn display_new_game(&mut self, state: &GameState) {
            self.new_games.push(state.root_word().to_string());
        }

        fn read_action(&mut self) -> Option<UserAction> {
            self.actions.pop_front().unwrap_or(Some(UserAction::Exit))
        }

        fn display_accepted(&mut self, word: &str, _state: &GameState) {
            self.accepted.push(word.to_string());
        }

        fn acknowledge_rejection(&mut self, rejection: &Rejection, state: &GameState) {
            assert_eq!(state.phase(), &Phase::DisplayingError(rejection.clone()));
            self.rejections.push(rejection.clone());
        }

        fn display_exit_message(&mut self, _state: &GameState) {
            self.exited = true;
        }
    }

    #[test]
    fn test_end_to_end_example() {
        let dictionary = ballc_dictionary();
        let mut state = GameState::with_root_word("ballc");

        assert_eq!(
            state.submit("ball", &dictionary),
            Ok(Submission::Accepted {
                word: "ball".to_string(),
                points: 4
            })
        );
        assert_eq!(state.score(), 4);
        assert_eq!(state.used_words(), ["ball"]);

        assert_eq!(
            state.submit("ball", &dictionary),
            Err(Rejection::DuplicateWord)
        );
        assert_eq!(state.score(), 4);
        assert_eq!(state.used_words(), ["ball"]);
        state.acknowledge_error();

        assert!(state.submit("allb", &dictionary).is_ok());
        assert_eq!(state.score(), 8);
        assert_eq!(state.used_words(), ["allb", "ball"]);

        assert_eq!(state.submit("bc", &dictionary), Err(Rejection::TooShort));
        assert_eq!(state.score(), 8);
    }

    #[test]
    fn test_score_sums_word_lengths() {
        let dictionary = fixture(&["tale", "alert", "ant"]);
        let mut state = GameState::with_root_word("triangle");
        for word in ["tale", "alert", "ant"] {
            assert!(state.submit(word, &dictionary).is_ok());
        }
        assert_eq!(state.score(), 12);
        assert_eq!(state.used_words(), ["ant", "alert", "tale"]);
    }

    #[test]
    fn test_input_is_normalized_before_scoring() {
        let dictionary = ballc_dictionary();
        let mut state = GameState::with_root_word("ballc");
        let result = state.submit("  BALL \n", &dictionary);
        assert_eq!(
            result,
            Ok(Submission::Accepted {
                word: "ball".to_string(),
                points: 4
            })
        );
        assert_eq!(state.score(), 4);
    }

    #[test]
    fn test_whitespace_submission_is_noop() {
        let dictionary = ballc_dictionary();
        let mut state = GameState::with_root_word("ballc");
        state.submit("ball", &dictionary).unwrap();
        let _ = state.submit("zzz", &dictionary);
        let phase_before = state.phase().clone();

        assert_eq!(state.submit("   \t\n", &dictionary), Ok(Submission::Ignored));
        assert_eq!(state.submit("", &dictionary), Ok(Submission::Ignored));

        assert_eq!(state.used_words(), ["ball"]);
        assert_eq!(state.score(), 4);
        assert_eq!(state.phase(), &phase_before);
    }

    #[test]
    fn test_rejection_sets_error_phase() {
        let dictionary = ballc_dictionary();
        let mut state = GameState::with_root_word("ballc");
        let rejection = state.submit("ballc", &dictionary).unwrap_err();
        assert_eq!(rejection, Rejection::SameAsRoot);
        assert_eq!(state.phase(), &Phase::DisplayingError(Rejection::SameAsRoot));

        state.acknowledge_error();
        assert_eq!(state.phase(), &Phase::AwaitingInput);
    }

    #[test]
    fn test_reset_clears_words_and_score() {
        let dictionary = ballc_dictionary();
        let source = WordSource::from_text("ballc\n");
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = GameState::new(&source, &mut rng);
        state.submit("ball", &dictionary).unwrap();
        let _ = state.submit("q", &dictionary);

        state.start_or_reset(&source, &mut rng);

        assert_eq!(state.root_word(), "ballc");
        assert!(state.used_words().is_empty());
        assert_eq!(state.score(), 0);
        assert_eq!(state.phase(), &Phase::AwaitingInput);
    }

    #[test]
    fn test_reset_allows_previous_words_again() {
        let dictionary = ballc_dictionary();
        let source = WordSource::from_text("ballc\n");
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = GameState::new(&source, &mut rng);
        state.submit("ball", &dictionary).unwrap();
        state.start_or_reset(&source, &mut rng);
        assert!(state.submit("ball", &dictionary).is_ok());
    }

    #[test]
    fn test_describe_word() {
        assert_eq!(describe_word("ball"), "ball (4 letters)");
        assert_eq!(describe_word("a"), "a (1 letter)");
    }

    #[test]
    fn test_game_loop_immediate_exit() {
        let source = WordSource::from_text("ballc");
        let dictionary = ballc_dictionary();
        let mut rng = StdRng::seed_from_u64(1);
        let mut interface = ScriptedInterface::new(vec![Some(UserAction::Exit)]);

        let state = game_loop(&source, &dictionary, &mut rng, &mut interface);

        assert!(interface.exited);
        assert_eq!(interface.new_games, vec!["ballc"]);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_game_loop_accepts_and_rejects() {
        let source = WordSource::from_text("ballc");
        let dictionary = ballc_dictionary();
        let mut rng = StdRng::seed_from_u64(1);
        let mut interface = ScriptedInterface::new(vec![
            Some(UserAction::Submit("ball".to_string())),
            None,
            Some(UserAction::Submit("ball".to_string())),
            Some(UserAction::Submit("   ".to_string())),
            Some(UserAction::Submit("cab".to_string())),
            Some(UserAction::Exit),
        ]);

        let state = game_loop(&source, &dictionary, &mut rng, &mut interface);

        assert_eq!(interface.accepted, vec!["ball", "cab"]);
        assert_eq!(interface.rejections, vec![Rejection::DuplicateWord]);
        assert_eq!(state.score(), 7);
        assert_eq!(state.phase(), &Phase::AwaitingInput);
    }

    #[test]
    fn test_game_loop_reset() {
        let source = WordSource::from_text("ballc");
        let dictionary = ballc_dictionary();
        let mut rng = StdRng::seed_from_u64(1);
        let mut interface = ScriptedInterface::new(vec![
            Some(UserAction::Submit("ball".to_string())),
            Some(UserAction::Reset),
            Some(UserAction::Exit),
        ]);

        let state = game_loop(&source, &dictionary, &mut rng, &mut interface);

        assert_eq!(interface.new_games.len(), 2);
        assert!(state.used_words().is_empty());
        assert_eq!(state.score(), 0);
    }
}
