use crate::classifier::is_khmer_char;

/// Length of the unbroken Khmer run starting at `start`.
///
/// Used when no dictionary entry matches: the whole run becomes one token,
/// with no attempt to split it further. Stops at the first punctuation,
/// whitespace or non-Khmer character. Never returns 0 for an in-bounds
/// `start`, so the caller always makes progress.
#[inline]
pub fn khmer_run_length(cps: &[char], start: usize) -> usize {
    if start >= cps.len() {
        return 0;
    }

    let len = cps[start..]
        .iter()
        .take_while(|&&c| is_khmer_char(c))
        .count();

    len.max(1)
}
