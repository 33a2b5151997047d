use crate::walker::{clamp_index, terminated, CharWalker};

/// Translates a 1-based byte position in `s` into the 1-based index of the
/// character containing it.
///
/// A position inside a multi-byte character maps to that character. A
/// position at or before 1 maps to 1, and a position past the end maps to
/// one more than the number of characters.
///
/// ```
/// # use utf8_index::utf8_convert_index;
/// let s = "héllo".as_bytes();
/// assert_eq!(utf8_convert_index(2, s), 2); // first byte of "é"
/// assert_eq!(utf8_convert_index(3, s), 2); // second byte of "é"
/// assert_eq!(utf8_convert_index(4, s), 3);
/// ```
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn utf8_convert_index(byte_pos: i64, s: &[u8]) -> i64 {
    let s = terminated(s);
    let consumed = clamp_index(byte_pos.saturating_sub(1)).min(s.len());

    let mut walker = CharWalker::new();
    for &byte in s.iter().take(consumed) {
        walker.step(byte);
    }
    walker.count() as i64 + 1
}
