use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dictionary::{Dictionary, SharedDictionary, MAX_WORD_LEN, MIN_WORD_LEN};
use crate::error::ConfigError;
use crate::tokenizer::Tokenizer;

/// Tokenizer settings, loadable from a JSON file. Missing fields take
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    pub keep_spaces: bool,
    pub max_match_len: usize,
    pub min_match_len: usize,
    /// Extra word list merged on top of the built-in dictionary.
    pub dictionary_path: Option<PathBuf>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            keep_spaces: true,
            max_match_len: MAX_WORD_LEN,
            min_match_len: MIN_WORD_LEN,
            dictionary_path: None,
        }
    }
}

impl TokenizerConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: TokenizerConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_match_len == 0 || self.min_match_len > self.max_match_len {
            return Err(ConfigError::InvalidBounds {
                min: self.min_match_len,
                max: self.max_match_len,
            });
        }
        Ok(())
    }

    /// Build a tokenizer over a fresh dictionary: built-in words plus the
    /// optional word-list file.
    pub fn build(&self) -> Result<Tokenizer, ConfigError> {
        self.validate()?;

        let mut dictionary = Dictionary::builtin();
        if let Some(path) = &self.dictionary_path {
            let added = dictionary.load_words(path)?;
            log::info!("merged {} words from {}", added, path.display());
        }

        Ok(Tokenizer::new(SharedDictionary::new(dictionary))
            .with_keep_spaces(self.keep_spaces)
            .with_match_bounds(self.min_match_len, self.max_match_len))
    }
}
