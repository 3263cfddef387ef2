//! Dictionary-assisted Khmer tokenizer.
//!
//! Khmer is written without spaces between words. [`Tokenizer`] turns raw
//! text into an ordered, lossless token list using per-codepoint script
//! classification, greedy longest dictionary match, and a whole-run fallback
//! for unknown words. The [`word_count`] helpers count and extract Khmer
//! content from documents that are already space-separated.
//!
//! ```
//! use khmer_tokenizer::Tokenizer;
//!
//! let tokenizer = Tokenizer::builtin();
//! assert_eq!(
//!     tokenizer.tokenize("Hello, world!", true),
//!     vec!["Hello", ",", " ", "world", "!"]
//! );
//! ```

pub mod builtin;
pub mod classifier;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod fallback;
pub mod logging;
pub mod tokenizer;
pub mod word_count;

pub use classifier::{classify, CharClass};
pub use config::TokenizerConfig;
pub use dictionary::{Dictionary, SharedDictionary};
pub use error::{ConfigError, DictionaryError};
pub use tokenizer::{Segmentation, Token, Tokenizer, SEGMENTER_SOURCE};
pub use word_count::{
    count_khmer_words, count_khmer_words as count_khmer_words_from_text,
    count_khmer_words_from_file, extract_khmer_text, is_khmer_text,
};
