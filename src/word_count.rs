//! Whitespace-based Khmer word counting and Khmer text extraction.
//!
//! These helpers only use the character classifier. They target documents
//! that already separate words with spaces, so no dictionary is involved.

use std::fs;
use std::path::Path;

use crate::classifier::{is_khmer_char, is_khmer_codepoint};

/// Count whitespace-separated chunks that contain a Khmer character.
pub fn count_khmer_words(text: &str) -> usize {
    text.split_whitespace()
        .filter(|chunk| chunk.chars().any(is_khmer_char))
        .count()
}

/// True if `text` has any codepoint in U+1780..=U+17FF.
pub fn is_khmer_text(text: &str) -> bool {
    text.chars().any(is_khmer_codepoint)
}

/// Keep only Khmer characters and whitespace, in their original order.
pub fn extract_khmer_text(text: &str) -> String {
    text.chars()
        .filter(|&c| is_khmer_char(c) || c.is_whitespace())
        .collect()
}

/// Khmer word count of a stored document.
///
/// Only plain text is read (`mime_type` absent or `text/plain`). Any other
/// type, or a file that cannot be read, counts as 0.
pub fn count_khmer_words_from_file(path: &Path, mime_type: Option<&str>) -> usize {
    match mime_type {
        None | Some("text/plain") => {}
        Some(other) => {
            log::debug!("not counting words in {} ({})", path.display(), other);
            return 0;
        }
    }

    match fs::read(path) {
        Ok(bytes) => count_khmer_words(&String::from_utf8_lossy(&bytes)),
        Err(err) => {
            log::warn!("could not read {} for word count: {}", path.display(), err);
            0
        }
    }
}
