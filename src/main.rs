use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;
use word_scramble::cli::{CliInterface, parse_cli};
use word_scramble::game_state::game_loop;
use word_scramble::logging::{default_log_path, init_logging, log_destination};
use word_scramble::resources::resolve_resource;
use word_scramble::tui::TuiInterface;
use word_scramble::{LoadError, WordListDictionary, WordSource};

const START_WORDS_FILE: &str = "start.txt";
const DICTIONARY_FILE: &str = "dictionary.txt";

fn load_word_source(explicit: Option<&std::path::Path>) -> Result<WordSource, LoadError> {
    match resolve_resource(explicit, START_WORDS_FILE) {
        Some(path) => WordSource::from_file(path),
        None => Ok(WordSource::embedded()),
    }
}

fn load_dictionary(explicit: Option<&std::path::Path>) -> Result<WordListDictionary, LoadError> {
    match resolve_resource(explicit, DICTIONARY_FILE) {
        Some(path) => WordListDictionary::from_file(path),
        None => Ok(WordListDictionary::embedded()),
    }
}

fn main() -> ExitCode {
    let cli = parse_cli();

    let destination = log_destination(cli.log_file.as_deref(), cli.tui, default_log_path());
    if let Err(e) = init_logging(&destination) {
        eprintln!("Failed to open log file: {e}");
        return ExitCode::FAILURE;
    }

    // Missing resources are a packaging problem, not something the player can fix.
    let source = match load_word_source(cli.words_path.as_deref()) {
        Ok(source) => source,
        Err(e) => {
            log::error!("Failed to load root words: {e}");
            eprintln!("Failed to load root words: {e}");
            return ExitCode::FAILURE;
        }
    };
    let dictionary = match load_dictionary(cli.dictionary_path.as_deref()) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            log::error!("Failed to load dictionary: {e}");
            eprintln!("Failed to load dictionary: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "Starting with {} root words and {} dictionary words",
        source.len(),
        dictionary.len()
    );

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let final_state = if cli.tui {
        let mut interface = match TuiInterface::new() {
            Ok(interface) => interface,
            Err(e) => {
                eprintln!("Failed to start terminal interface: {e}");
                return ExitCode::FAILURE;
            }
        };
        game_loop(&source, &dictionary, &mut rng, &mut interface)
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&source, &dictionary, &mut rng, &mut interface)
    };

    log::info!(
        "Session ended on '{}' with score {} ({} words)",
        final_state.root_word(),
        final_state.score(),
        final_state.used_words().len()
    );
    ExitCode::SUCCESS
}
