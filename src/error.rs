use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the dictionary and word selection.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("invalid word {word:?}: {reason}")]
    InvalidInput { word: String, reason: &'static str },

    #[error("the dictionary is empty")]
    EmptyDictionary,

    #[error("index {index} is out of range for a dictionary of {count} words")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("failed to read dictionary '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
