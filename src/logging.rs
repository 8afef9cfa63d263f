// Conditional logging macros - only active in debug builds

use crate::resources::APP_DIR;
use chrono::Local;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

const DEFAULT_FILTER: &str = "warn";
const LOG_FILE_NAME: &str = "word-scramble.log";

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    Stderr,
    File(PathBuf),
    /// No writable location while the TUI owns the terminal.
    Off,
}

/// Default log file for TUI sessions, e.g. `~/.cache/word-scramble/word-scramble.log`.
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE_NAME))
}

/// An explicit file always wins. The TUI draws on the terminal, so it never
/// logs to stderr: it falls back to `fallback_file`, or turns logging off.
#[must_use]
pub fn log_destination(
    explicit: Option<&Path>,
    tui: bool,
    fallback_file: Option<PathBuf>,
) -> LogDestination {
    match (explicit, tui) {
        (Some(path), _) => LogDestination::File(path.to_path_buf()),
        (None, false) => LogDestination::Stderr,
        (None, true) => fallback_file.map_or(LogDestination::Off, LogDestination::File),
    }
}

/// Install the global logger.
///
/// `RUST_LOG` controls the filter (defaults to `warn`). [`LogDestination::Off`]
/// installs nothing, so every record is dropped.
///
/// # Errors
///
/// Returns an I/O error if the log file or its directory cannot be created.
pub fn init_logging(destination: &LogDestination) -> io::Result<()> {
    if *destination == LogDestination::Off {
        return Ok(());
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER));

    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let LogDestination::File(path) = destination {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // A second initialisation (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_log_file_wins() {
        let explicit = Path::new("/tmp/game.log");
        assert_eq!(
            log_destination(Some(explicit), true, Some(PathBuf::from("/tmp/other.log"))),
            LogDestination::File(explicit.to_path_buf())
        );
        assert_eq!(
            log_destination(Some(explicit), false, None),
            LogDestination::File(explicit.to_path_buf())
        );
    }

    #[test]
    fn test_line_interface_logs_to_stderr() {
        assert_eq!(log_destination(None, false, None), LogDestination::Stderr);
    }

    #[test]
    fn test_tui_never_logs_to_stderr() {
        let fallback = PathBuf::from("/tmp/word-scramble.log");
        assert_eq!(
            log_destination(None, true, Some(fallback.clone())),
            LogDestination::File(fallback)
        );
        assert_eq!(log_destination(None, true, None), LogDestination::Off);
    }

    #[test]
    fn test_default_log_path_uses_app_directory() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("word-scramble/word-scramble.log"));
        }
    }

    #[test]
    fn test_init_logging_creates_log_directory() {
        let dir = std::env::temp_dir().join("word_scramble_log_dir_test");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("session.log");

        init_logging(&LogDestination::File(path.clone())).unwrap();

        assert!(path.is_file());
        let _ = fs::remove_dir_all(&dir);
    }
}
