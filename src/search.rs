//! Needle search by character position.
//!
//! Both directions compare the needle byte by byte at candidate offsets of
//! the haystack. With `case_matters == false`, ASCII letters compare without
//! regard to case; every other byte compares by value.

use crate::classify::is_continuation;
use crate::length::utf8_strlen;
use crate::walker::{terminated, CharWalker};

/// `true` if `needle` occurs in `haystack` at byte offset `at`.
///
/// An empty needle matches anywhere; a haystack that ends before the needle
/// does not match.
fn matches_at(haystack: &[u8], at: usize, needle: &[u8], case_matters: bool) -> bool {
    let Some(window) = haystack.get(at..at + needle.len()) else {
        return false;
    };
    if case_matters {
        window == needle
    } else {
        window.eq_ignore_ascii_case(needle)
    }
}

/// Returns the 1-based character index of the first occurrence of `needle`
/// in `haystack`, or 0 when there is none.
///
/// Matches are only tried where a character starts, never in the middle of
/// one. An empty needle is found at index 1 of any non-empty haystack.
///
/// ```
/// # use utf8_index::utf8_strindex;
/// assert_eq!(utf8_strindex(b"Hello World", b"world", false), 7);
/// assert_eq!(utf8_strindex(b"Hello World", b"world", true), 0);
/// assert_eq!(utf8_strindex("naïve café".as_bytes(), "café".as_bytes(), true), 7);
/// ```
#[must_use]
pub fn utf8_strindex(haystack: &[u8], needle: &[u8], case_matters: bool) -> usize {
    let haystack = terminated(haystack);
    let needle = terminated(needle);

    let mut walker = CharWalker::new();
    for (pos, &byte) in haystack.iter().enumerate() {
        if walker.at_boundary() && matches_at(haystack, pos, needle, case_matters) {
            return walker.count() + 1;
        }
        walker.step(byte);
    }
    0
}

/// Returns the 1-based character index of the last occurrence of `needle`
/// in `haystack`, or 0 when there is none.
///
/// Candidates are tried from the last byte backwards, skipping continuation
/// bytes. The index is the character count of the bytes before the match,
/// plus one.
///
/// ```
/// # use utf8_index::utf8_strrindex;
/// assert_eq!(utf8_strrindex(b"abcabc", b"bc", true), 5);
/// assert_eq!(utf8_strrindex("héllo héllo".as_bytes(), "É".as_bytes(), false), 0);
/// assert_eq!(utf8_strrindex("héllo héllo".as_bytes(), "é".as_bytes(), true), 8);
/// ```
#[must_use]
pub fn utf8_strrindex(haystack: &[u8], needle: &[u8], case_matters: bool) -> usize {
    let haystack = terminated(haystack);
    let needle = terminated(needle);

    for (pos, &byte) in haystack.iter().enumerate().rev() {
        if is_continuation(byte) {
            continue;
        }
        if matches_at(haystack, pos, needle, case_matters) {
            let before = haystack.get(..pos).unwrap_or_default();
            return utf8_strlen(before) + 1;
        }
    }
    0
}
