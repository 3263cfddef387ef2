use std::fs;
use std::path::Path;
use std::sync::Arc;

use fxhash::{FxHashMap, FxHashSet};
use parking_lot::RwLock;

use crate::builtin::BUILTIN_WORDS;
use crate::classifier::is_khmer_char;
use crate::error::DictionaryError;

/// Longest dictionary entry, in codepoints.
pub const MAX_WORD_LEN: usize = 15;
/// Shortest dictionary entry, in codepoints.
pub const MIN_WORD_LEN: usize = 2;

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: FxHashMap<char, Box<TrieNode>>,
    is_word: bool,
}

impl TrieNode {
    #[inline]
    fn get_child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c).map(|b| b.as_ref())
    }

    fn get_or_create_child(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_insert_with(|| Box::new(TrieNode::default()))
    }
}

/// Append-only set of known Khmer words.
///
/// Words are kept both in a hash set for exact lookups and in a codepoint
/// trie so the longest entry starting at an offset is found in one walk.
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    words: FxHashSet<String>,
    trie: TrieNode,
    max_word_length: usize,
}

impl Dictionary {
    /// Empty dictionary. Every Khmer run falls back to a single token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dictionary seeded with the curated built-in word list.
    pub fn builtin() -> Self {
        let dictionary = Self::from_words(BUILTIN_WORDS.iter().copied());
        log::debug!("built-in dictionary loaded with {} words", dictionary.len());
        dictionary
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        dictionary.add_words(words);
        dictionary
    }

    /// Load a word list with one entry per line. Blank lines and lines
    /// starting with `#` are ignored; malformed entries are skipped.
    pub fn from_path(path: &Path) -> Result<Self, DictionaryError> {
        let mut dictionary = Self::new();
        dictionary.load_words(path)?;
        Ok(dictionary)
    }

    /// Merge the entries of a word-list file, returning how many were new.
    pub fn load_words(&mut self, path: &Path) -> Result<usize, DictionaryError> {
        let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut accepted = 0;
        let mut added = 0;
        for line in content.lines() {
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            if !is_valid_entry(word) {
                log::debug!("skipping invalid dictionary entry {:?} in {}", word, path.display());
                continue;
            }
            accepted += 1;
            if self.insert(word) {
                added += 1;
            }
        }

        if accepted == 0 {
            return Err(DictionaryError::NoValidWords(path.to_path_buf()));
        }
        log::debug!("loaded {} new words from {}", added, path.display());
        Ok(added)
    }

    /// Merge new entries. Duplicates and entries that are not 2-15 Khmer
    /// characters are ignored. Returns the number of words actually added.
    pub fn add_words<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for word in words {
            let word = word.as_ref();
            if !is_valid_entry(word) {
                log::debug!("rejecting dictionary entry {:?}", word);
                continue;
            }
            if self.insert(word) {
                added += 1;
            }
        }
        added
    }

    fn insert(&mut self, word: &str) -> bool {
        if !self.words.insert(word.to_string()) {
            return false;
        }

        let mut node = &mut self.trie;
        let mut len = 0;
        for c in word.chars() {
            node = node.get_or_create_child(c);
            len += 1;
        }
        node.is_word = true;
        self.max_word_length = self.max_word_length.max(len);
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length in codepoints of the longest entry.
    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }

    /// Length of the longest entry starting at `offset`, probing 15 down to 2
    /// codepoints.
    #[inline]
    pub fn longest_match_at(&self, cps: &[char], offset: usize) -> Option<usize> {
        self.longest_match_within(cps, offset, MAX_WORD_LEN, MIN_WORD_LEN)
    }

    /// Length of the longest entry of `min_len..=max_len` codepoints starting
    /// at `offset`. `max_len` is clamped to the longest entry and to the
    /// remaining text.
    ///
    /// Returns the same answer as probing every candidate length from
    /// `max_len` down to `min_len` and keeping the first hit.
    pub fn longest_match_within(
        &self,
        cps: &[char],
        offset: usize,
        max_len: usize,
        min_len: usize,
    ) -> Option<usize> {
        if offset >= cps.len() {
            return None;
        }
        let limit = max_len.min(self.max_word_length).min(cps.len() - offset);

        let mut node = &self.trie;
        let mut best = None;
        for (i, &c) in cps[offset..offset + limit].iter().enumerate() {
            match node.get_child(c) {
                Some(child) => node = child,
                None => break,
            }
            let len = i + 1;
            if node.is_word && len >= min_len {
                best = Some(len);
            }
        }
        best
    }

    /// The longest entry starting at codepoint `offset` of `text`, as a string.
    pub fn longest_match_str(&self, text: &str, offset: usize) -> Option<String> {
        let cps: Vec<char> = text.chars().collect();
        self.longest_match_at(&cps, offset)
            .map(|len| cps[offset..offset + len].iter().collect())
    }
}

/// A dictionary entry is 2-15 codepoints, every one Khmer-classified.
pub fn is_valid_entry(word: &str) -> bool {
    let len = word.chars().count();
    (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len) && word.chars().all(is_khmer_char)
}

/// Process-wide dictionary handle shared across tokenizer instances.
///
/// Readers take an `Arc` snapshot and keep it for the whole call; writers
/// extend a private copy when snapshots are outstanding and swap it in.
#[derive(Clone)]
pub struct SharedDictionary {
    inner: Arc<RwLock<Arc<Dictionary>>>,
}

impl SharedDictionary {
    pub fn new(dictionary: Dictionary) -> Self {
        SharedDictionary {
            inner: Arc::new(RwLock::new(Arc::new(dictionary))),
        }
    }

    pub fn builtin() -> Self {
        Self::new(Dictionary::builtin())
    }

    pub fn snapshot(&self) -> Arc<Dictionary> {
        Arc::clone(&self.inner.read())
    }

    /// Extend the shared dictionary. Never removes entries.
    pub fn add_words<I, S>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // Drain the caller's iterator before locking; it may read this dictionary.
        let words: Vec<String> = words
            .into_iter()
            .filter_map(|word| {
                let word = word.as_ref();
                if is_valid_entry(word) {
                    Some(word.to_string())
                } else {
                    log::debug!("rejecting dictionary entry {:?}", word);
                    None
                }
            })
            .collect();
        if words.is_empty() {
            return 0;
        }

        let mut guard = self.inner.write();
        let added = Arc::make_mut(&mut *guard).add_words(words);
        log::debug!("added {} words, dictionary now holds {}", added, guard.len());
        added
    }

    pub fn contains(&self, word: &str) -> bool {
        self.inner.read().contains(word)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl From<Dictionary> for SharedDictionary {
    fn from(dictionary: Dictionary) -> Self {
        Self::new(dictionary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Write;

    fn cps(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_builtin_entries_are_all_valid() {
        let unique: HashSet<&str> = BUILTIN_WORDS.iter().copied().collect();
        for word in &unique {
            assert!(is_valid_entry(word), "invalid built-in entry {:?}", word);
        }
        assert_eq!(Dictionary::builtin().len(), unique.len());
    }

    #[test]
    fn test_contains_exact() {
        let dict = Dictionary::from_words(["ការ", "ការអាន"]);
        assert!(dict.contains("ការ"));
        assert!(dict.contains("ការអាន"));
        assert!(!dict.contains("អាន"));
        assert!(!dict.contains("ការអ"));
    }

    #[test]
    fn test_longest_match_prefers_longer_entry() {
        let dict = Dictionary::from_words(["ការ", "ការអាន"]);
        let text = cps("ការអានសៀវភៅ");
        assert_eq!(dict.longest_match_at(&text, 0), Some(6));
        assert_eq!(dict.longest_match_str("ការអានសៀវភៅ", 0).as_deref(), Some("ការអាន"));
    }

    #[test]
    fn test_longest_match_falls_back_to_shorter_prefix() {
        let dict = Dictionary::from_words(["ការ", "ការអាន"]);
        let text = cps("ការងារ");
        assert_eq!(dict.longest_match_at(&text, 0), Some(3));
    }

    #[test]
    fn test_longest_match_at_offset_and_end() {
        let dict = Dictionary::from_words(["អាន"]);
        let text = cps("ការអាន");
        assert_eq!(dict.longest_match_at(&text, 0), None);
        assert_eq!(dict.longest_match_at(&text, 3), Some(3));
        assert_eq!(dict.longest_match_at(&text, 6), None);
        assert_eq!(dict.longest_match_at(&text, 42), None);
    }

    #[test]
    fn test_longest_match_respects_bounds() {
        let dict = Dictionary::from_words(["ការ", "ការអាន"]);
        let text = cps("ការអាន");
        assert_eq!(dict.longest_match_within(&text, 0, 5, 2), Some(3));
        assert_eq!(dict.longest_match_within(&text, 0, 15, 4), Some(6));
        assert_eq!(dict.longest_match_within(&text, 0, 2, 2), None);
    }

    #[test]
    fn test_add_words_is_idempotent_and_validates() {
        let mut dict = Dictionary::new();
        assert_eq!(dict.add_words(["ខ្មែរ", "ខ្មែរ"]), 1);
        assert_eq!(dict.add_words(["ខ្មែរ"]), 0);
        // too short, non-Khmer, punctuation, too long
        let too_long = "ក".repeat(MAX_WORD_LEN + 1);
        assert_eq!(dict.add_words(["ក", "hello", "ខ្មែរ។", too_long.as_str()]), 0);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.max_word_length(), 5);
    }

    #[test]
    fn test_shared_add_words_keeps_old_snapshots_stable() {
        let shared = SharedDictionary::new(Dictionary::from_words(["ខ្មែរ"]));
        let before = shared.snapshot();
        assert_eq!(shared.add_words(["កម្ពុជា"]), 1);
        assert!(!before.contains("កម្ពុជា"));
        assert!(shared.snapshot().contains("កម្ពុជា"));
        assert_eq!(shared.len(), 2);
    }

    #[test]
    fn test_max_word_length_caps_probe() {
        let text = cps("ការអានសៀវភៅ");
        assert_eq!(Dictionary::new().longest_match_at(&text, 0), None);

        let mut dict = Dictionary::from_words(["ការ"]);
        assert_eq!(dict.max_word_length(), 3);
        assert_eq!(dict.longest_match_at(&text, 0), Some(3));

        dict.add_words(["ការអានសៀវភៅ"]);
        assert_eq!(dict.max_word_length(), 11);
        assert_eq!(dict.longest_match_at(&text, 0), Some(11));
    }

    #[test]
    fn test_shared_add_words_filter_can_read_dictionary() {
        let shared = SharedDictionary::new(Dictionary::from_words(["ខ្មែរ"]));
        let incoming = ["ខ្មែរ", "កម្ពុជា", "hello"];

        let (tx, rx) = std::sync::mpsc::channel();
        let worker = shared.clone();
        std::thread::spawn(move || {
            let added = worker.add_words(incoming.iter().filter(|w| !worker.contains(w)));
            let _ = tx.send(added);
        });

        let added = rx
            .recv_timeout(std::time::Duration::from_secs(5))
            .expect("add_words did not return");
        assert_eq!(added, 1);
        assert!(shared.contains("កម្ពុជា"));
        assert_eq!(shared.len(), 2);
    }

    #[test]
    fn test_load_words_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file, "  ខ្មែរ  ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "latin").unwrap();
        writeln!(file, "កម្ពុជា").unwrap();

        let dict = Dictionary::from_path(file.path()).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("ខ្មែរ"));
    }

    #[test]
    fn test_load_words_rejects_empty_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# nothing here").unwrap();
        let err = Dictionary::from_path(file.path()).unwrap_err();
        assert!(matches!(err, DictionaryError::NoValidWords(_)));

        let err = Dictionary::from_path(Path::new("/nonexistent/words.txt")).unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
    }
}
