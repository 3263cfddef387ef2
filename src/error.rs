use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to build a dictionary from an external word list.
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {0} contains no valid Khmer entries")]
    NoValidWords(PathBuf),
}

/// Failure to load or validate a [`TokenizerConfig`](crate::config::TokenizerConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid match bounds: min_match_len={min}, max_match_len={max}")]
    InvalidBounds { min: usize, max: usize },

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}
