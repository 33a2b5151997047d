use alloc::vec::Vec;

use crate::walker::{clamp_index, terminated, CharWalker};

/// Byte range `[start, end)` of the characters `lower..=upper` (1-based).
///
/// `None` when the range starts at or past the end of the string.
pub(crate) fn char_span(s: &[u8], lower: i64, upper: i64) -> Option<(usize, usize)> {
    let mut walker = CharWalker::new();
    let start = walker.walk_to(s, 0, clamp_index(lower.saturating_sub(1)));
    if start >= s.len() {
        return None;
    }
    let end = walker.walk_to(s, start, clamp_index(upper));
    Some((start, end))
}

/// Returns a copy of the characters `lower..=upper` (1-based, inclusive).
///
/// - `lower <= 1` starts at the first byte.
/// - A start at or beyond the end of the string gives an empty string.
/// - `upper` beyond the end stops at the end of the string; `upper < lower`
///   gives an empty string.
///
/// Bytes that do not start a character are carried with the character
/// after them.
///
/// ```
/// # use utf8_index::utf8_substr;
/// assert_eq!(utf8_substr("héllo".as_bytes(), 2, 2), "é".as_bytes());
/// assert_eq!(utf8_substr("héllo".as_bytes(), 2, 4), "éll".as_bytes());
/// assert_eq!(utf8_substr(b"short", 100, 100), b"");
/// ```
#[must_use]
pub fn utf8_substr(s: &[u8], lower: i64, upper: i64) -> Vec<u8> {
    let s = terminated(s);
    match char_span(s, lower, upper).and_then(|(start, end)| s.get(start..end)) {
        Some(bytes) => bytes.to_vec(),
        None => Vec::new(),
    }
}

/// Returns a copy of the character at 1-based `index`, or an empty string
/// when there is no such character.
#[must_use]
pub fn utf8_index(s: &[u8], index: i64) -> Vec<u8> {
    utf8_substr(s, index, index)
}
