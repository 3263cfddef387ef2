//! Per-codepoint script classification.

// Khmer Unicode block
pub const KHMER_START: char = '\u{1780}';
pub const KHMER_END: char = '\u{17FF}';

/// Class of a single Unicode scalar value, as seen by the tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    Khmer,
    LatinDigit,
    Punctuation,
    Whitespace,
    Unknown,
}

/// True for any codepoint inside the Khmer block, including Khmer punctuation.
#[inline]
pub fn is_khmer_codepoint(c: char) -> bool {
    (KHMER_START..=KHMER_END).contains(&c)
}

/// ASCII `. , ! ? ; :` plus Khmer khan, bariyoosan and koomuut.
#[inline]
pub fn is_punctuation(c: char) -> bool {
    matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '\u{17D4}' | '\u{17D5}' | '\u{17DA}')
}

#[inline]
pub fn is_latin_digit(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Classify one character. Rules are checked in priority order, so Khmer
/// punctuation inside the Khmer block is reported as `Punctuation`.
#[inline]
pub fn classify(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Whitespace
    } else if is_punctuation(c) {
        CharClass::Punctuation
    } else if is_latin_digit(c) {
        CharClass::LatinDigit
    } else if is_khmer_codepoint(c) {
        CharClass::Khmer
    } else {
        CharClass::Unknown
    }
}

#[inline]
pub fn is_khmer_char(c: char) -> bool {
    classify(c) == CharClass::Khmer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_wins() {
        for c in [' ', '\n', '\t', '\r', '\u{00A0}', '\u{3000}'] {
            assert_eq!(classify(c), CharClass::Whitespace, "{:?}", c);
        }
    }

    #[test]
    fn test_punctuation() {
        for c in ['.', ',', '!', '?', ';', ':', '។', '៕', '៚'] {
            assert_eq!(classify(c), CharClass::Punctuation, "{:?}", c);
        }
        // Khmer punctuation still lies in the block
        assert!(is_khmer_codepoint('។'));
        assert!(!is_khmer_char('។'));
    }

    #[test]
    fn test_latin_digit() {
        for c in ['a', 'Z', '0', '9'] {
            assert_eq!(classify(c), CharClass::LatinDigit);
        }
        assert_eq!(classify('é'), CharClass::Unknown);
    }

    #[test]
    fn test_khmer_block_bounds() {
        assert_eq!(classify('\u{1780}'), CharClass::Khmer);
        assert_eq!(classify('\u{17FF}'), CharClass::Khmer);
        assert_eq!(classify('ខ'), CharClass::Khmer);
        // Khmer digits are not ASCII, they stay in the Khmer class
        assert_eq!(classify('១'), CharClass::Khmer);
        assert_eq!(classify('\u{177F}'), CharClass::Unknown);
        assert_eq!(classify('\u{1800}'), CharClass::Unknown);
    }

    #[test]
    fn test_unknown() {
        for c in ['-', '@', '(', '\u{200B}', '€', '中'] {
            assert_eq!(classify(c), CharClass::Unknown, "{:?}", c);
        }
    }
}
