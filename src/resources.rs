use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const APP_DIR: &str = "word-scramble";

/// Failure to read a bundled or user-supplied word file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read '{path}': {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read a whole resource file into memory.
///
/// # Errors
///
/// Returns [`LoadError::Io`] carrying the offending path.
pub fn read_resource<P: AsRef<Path>>(path: P) -> Result<String, LoadError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Location of an optional override file in the user's config directory,
/// e.g. `~/.config/word-scramble/start.txt`.
#[must_use]
pub fn config_dir_path(file_name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(file_name))
}

/// Pick the file to load: an explicit path wins, then an existing file in the
/// config directory. `None` means the embedded copy should be used.
#[must_use]
pub fn resolve_resource(explicit: Option<&Path>, file_name: &str) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    config_dir_path(file_name).filter(|path| path.is_file())
}

/// Split resource text into trimmed, lower-cased, non-blank entries.
pub fn parse_word_lines(data: &str) -> impl Iterator<Item = String> + '_ {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
}
