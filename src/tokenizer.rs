//! Khmer-aware tokenizer.
//!
//! Input containing no Khmer character goes through a plain run splitter.
//! Anything with at least one Khmer character is scanned codepoint by
//! codepoint: dictionary longest match first, then the whole Khmer run as a
//! single token when nothing matches. Joining the tokens of a call made with
//! `keep_spaces = true` reproduces the input exactly.

use serde::Serialize;

use crate::classifier::{classify, is_khmer_char, CharClass};
use crate::dictionary::{Dictionary, SharedDictionary, MAX_WORD_LEN, MIN_WORD_LEN};
use crate::fallback::khmer_run_length;

/// Tag attached to every [`Segmentation`] produced by this crate.
pub const SEGMENTER_SOURCE: &str = "tokenizer";

/// One token and the codepoint index where it starts in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub start_offset: usize,
}

impl Token {
    fn from_cps(cps: &[char], start: usize, len: usize) -> Self {
        Token {
            text: cps[start..start + len].iter().collect(),
            start_offset: start,
        }
    }

    pub fn is_whitespace(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }
}

/// Result of [`Tokenizer::segment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segmentation {
    pub tokens: Vec<String>,
    pub source: &'static str,
}

#[derive(Clone)]
pub struct Tokenizer {
    dictionary: SharedDictionary,
    keep_spaces: bool,
    max_match_len: usize,
    min_match_len: usize,
}

impl Tokenizer {
    pub fn new(dictionary: SharedDictionary) -> Self {
        Tokenizer {
            dictionary,
            keep_spaces: true,
            max_match_len: MAX_WORD_LEN,
            min_match_len: MIN_WORD_LEN,
        }
    }

    /// Tokenizer over the built-in word list.
    pub fn builtin() -> Self {
        Self::new(SharedDictionary::builtin())
    }

    /// Default for [`tokenize_default`](Self::tokenize_default).
    pub fn with_keep_spaces(mut self, keep_spaces: bool) -> Self {
        self.keep_spaces = keep_spaces;
        self
    }

    /// Callers outside the crate go through `TokenizerConfig::build`, which
    /// validates the bounds.
    pub(crate) fn with_match_bounds(mut self, min_len: usize, max_len: usize) -> Self {
        self.min_match_len = min_len;
        self.max_match_len = max_len;
        self
    }

    pub fn dictionary(&self) -> &SharedDictionary {
        &self.dictionary
    }

    /// Extend the shared dictionary; visible to every later call.
    pub fn add_words<I, S>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.dictionary.add_words(words)
    }

    pub fn tokenize(&self, text: &str, keep_spaces: bool) -> Vec<String> {
        self.tokenize_tokens(text, keep_spaces)
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    /// [`tokenize`](Self::tokenize) with the configured `keep_spaces`.
    pub fn tokenize_default(&self, text: &str) -> Vec<String> {
        self.tokenize(text, self.keep_spaces)
    }

    pub fn segment(&self, text: &str) -> Segmentation {
        Segmentation {
            tokens: self.tokenize(text, true),
            source: SEGMENTER_SOURCE,
        }
    }

    pub fn tokenize_tokens(&self, text: &str, keep_spaces: bool) -> Vec<Token> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let cps: Vec<char> = text.chars().collect();

        // Any Khmer character routes the whole text through the Khmer scanner.
        if !cps.iter().any(|&c| is_khmer_char(c)) {
            return split_non_khmer(&cps, keep_spaces);
        }

        let dictionary = self.dictionary.snapshot();
        self.scan_khmer(&cps, &dictionary, keep_spaces)
    }

    fn scan_khmer(&self, cps: &[char], dictionary: &Dictionary, keep_spaces: bool) -> Vec<Token> {
        let n = cps.len();
        let mut tokens = Vec::with_capacity(n / 4 + 1);
        let mut i = 0;

        while i < n {
            let len = match classify(cps[i]) {
                CharClass::Whitespace => {
                    if keep_spaces {
                        tokens.push(Token::from_cps(cps, i, 1));
                    }
                    i += 1;
                    continue;
                }
                CharClass::Punctuation | CharClass::Unknown => 1,
                CharClass::LatinDigit => class_run_length(cps, i, CharClass::LatinDigit),
                CharClass::Khmer => dictionary
                    .longest_match_within(cps, i, self.max_match_len, self.min_match_len)
                    .unwrap_or_else(|| khmer_run_length(cps, i)),
            };
            tokens.push(Token::from_cps(cps, i, len));
            i += len;
        }

        tokens
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Coarse kind used by the non-Khmer splitter. Letters and digits form
/// separate runs here, unlike the Khmer scanner.
#[derive(Clone, Copy, PartialEq, Eq)]
enum RunKind {
    Letters,
    Digits,
    Whitespace,
    Single,
}

fn run_kind(c: char) -> RunKind {
    if c.is_ascii_alphabetic() {
        RunKind::Letters
    } else if c.is_ascii_digit() {
        RunKind::Digits
    } else if c.is_whitespace() {
        RunKind::Whitespace
    } else {
        RunKind::Single
    }
}

fn split_non_khmer(cps: &[char], keep_spaces: bool) -> Vec<Token> {
    let n = cps.len();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < n {
        let kind = run_kind(cps[i]);
        let len = match kind {
            RunKind::Single => 1,
            _ => cps[i..].iter().take_while(|&&c| run_kind(c) == kind).count(),
        };
        if kind != RunKind::Whitespace || keep_spaces {
            tokens.push(Token::from_cps(cps, i, len));
        }
        i += len;
    }

    tokens
}

#[inline]
fn class_run_length(cps: &[char], start: usize, class: CharClass) -> usize {
    cps[start..]
        .iter()
        .take_while(|&&c| classify(c) == class)
        .count()
}
