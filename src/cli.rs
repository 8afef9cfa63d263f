use crate::game_state::{GameInterface, GameState, UserAction, describe_word};
use crate::validation::Rejection;
use crate::debug_log;
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Word Scramble: make as many words as you can from the root word
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited list of root words
    #[arg(short = 'w', long = "words")]
    pub words_path: Option<PathBuf>,

    /// Path to a newline-delimited dictionary of accepted words
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<PathBuf>,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Seed for root word selection, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

const RESET_COMMAND: &str = ":reset";
const QUIT_COMMAND: &str = ":quit";

pub enum WordInput {
    Word(String),
    Reset,
    Exit,
}

pub fn read_word<R: BufRead>(reader: &mut R) -> WordInput {
    println!("\nEnter a word ('{RESET_COMMAND}' for a new root word, '{QUIT_COMMAND}' to quit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => {
            debug_log!("read_word() - End of input");
            return WordInput::Exit;
        }
        Ok(_) => {}
        Err(e) => {
            debug_log!("read_word() - Read error: {}", e);
            return WordInput::Exit;
        }
    }

    match input.trim().to_lowercase().as_str() {
        RESET_COMMAND => WordInput::Reset,
        QUIT_COMMAND => WordInput::Exit,
        _ => WordInput::Word(input),
    }
}

pub fn display_new_game(root_word: &str) {
    println!("New game! Your root word is: {}", root_word.to_uppercase());
}

pub fn display_accepted(word: &str, score: usize) {
    println!("Accepted: {}. Score: {score}", describe_word(word));
}

pub fn display_rejection(rejection: &Rejection) {
    println!("{}: {}", rejection.title(), rejection.message());
}

pub fn display_used_words(used_words: &[String]) {
    if used_words.is_empty() {
        return;
    }
    println!("Your words ({}):", used_words.len());
    for word in used_words {
        println!("  {}", describe_word(word));
    }
}

pub fn display_exit_message(score: usize) {
    println!("Exiting. Final score: {score}");
}

/// Line-based implementation of [`GameInterface`] over any `BufRead`.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_new_game(&mut self, state: &GameState) {
        display_new_game(state.root_word());
    }

    fn read_action(&mut self) -> Option<UserAction> {
        match read_word(&mut self.reader) {
            WordInput::Word(word) => Some(UserAction::Submit(word)),
            WordInput::Reset => Some(UserAction::Reset),
            WordInput::Exit => Some(UserAction::Exit),
        }
    }

    fn display_accepted(&mut self, word: &str, state: &GameState) {
        display_accepted(word, state.score());
        display_used_words(state.used_words());
    }

    fn acknowledge_rejection(&mut self, rejection: &Rejection, _state: &GameState) {
        display_rejection(rejection);
    }

    fn display_exit_message(&mut self, state: &GameState) {
        display_exit_message(state.score());
    }
}
