use alloc::vec::Vec;

use crate::walker::{clamp_index, terminated, CharWalker};

/// Byte offsets `(prefix_end, suffix_start)` around the characters
/// `from..=to` (1-based).
///
/// The prefix holds the characters before `from`, the suffix those after
/// `to`. When `to < from - 1` both offsets sit after character `to`, so the
/// range degenerates to an insertion point. The flag is set when the string
/// ends before character `to`.
pub(crate) fn replace_span(s: &[u8], from: i64, to: i64) -> (usize, usize, bool) {
    let before = clamp_index(from.saturating_sub(1));
    let through = clamp_index(to);

    let mut walker = CharWalker::new();
    let prefix_end = walker.walk_to(s, 0, before.min(through));
    let suffix_start = walker.walk_to(s, prefix_end, through);
    (prefix_end, suffix_start, walker.count() < through)
}

/// Returns `lhs` with the characters `from..=to` (1-based, inclusive)
/// replaced by `rhs`.
///
/// `from == to + 1` inserts `rhs` before character `from`. A range that runs
/// past the end of `lhs` leaves an empty suffix.
///
/// ```
/// # use utf8_index::utf8_strrangeset;
/// assert_eq!(utf8_strrangeset("héllo".as_bytes(), 2, 3, b"EL"), b"hELlo");
/// assert_eq!(utf8_strrangeset(b"hello", 3, 2, b"--"), b"he--llo");
/// assert_eq!(utf8_strrangeset(b"hello", 4, 10, b"p!"), b"help!");
/// ```
#[must_use]
pub fn utf8_strrangeset(lhs: &[u8], from: i64, to: i64, rhs: &[u8]) -> Vec<u8> {
    let lhs = terminated(lhs);
    let rhs = terminated(rhs);
    let (prefix_end, suffix_start, past_end) = replace_span(lhs, from, to);
    let (prefix, rest) = lhs.split_at(prefix_end);
    let suffix = rest.get(suffix_start - prefix_end..).unwrap_or_default();

    if past_end {
        tracing::trace!(from, to, length = lhs.len(), "replacement range reaches end of string");
    }

    let mut out = Vec::with_capacity(prefix.len() + rhs.len() + suffix.len());
    out.extend_from_slice(prefix);
    out.extend_from_slice(rhs);
    out.extend_from_slice(suffix);
    out
}

/// Returns `lhs` with the character at 1-based `index` replaced by `rhs`.
#[must_use]
pub fn utf8_copyandset(lhs: &[u8], index: i64, rhs: &[u8]) -> Vec<u8> {
    utf8_strrangeset(lhs, index, index, rhs)
}
