//! Character counting.
//!
//! `utf8_strlen` runs the scalar walker over the unaligned head of the
//! buffer, then steps whole aligned 8-byte words, then finishes the tail with
//! the walker again. A word is consumed in one step when its lead bytes and
//! continuation bytes line up, which is always the case for well-formed text.
//! Any other word (a NUL byte, a lead where a continuation byte is expected)
//! is stepped byte by byte, so the result never differs from the walker's.

use crate::walker::CharWalker;

const WORD: usize = 8;
const ONES: u64 = u64::MAX / 0xFF;
const HIGHS: u64 = ONES * 0x80;

/// Counts the characters of `s`, stopping at the first NUL byte.
///
/// Weird bytes (a continuation byte or `0xFE`/`0xFF` where a character
/// should start) are not counted, and a character cut short by the end of
/// the string is not counted either.
///
/// ```
/// # use utf8_index::utf8_strlen;
/// assert_eq!(utf8_strlen(b""), 0);
/// assert_eq!(utf8_strlen("héllo".as_bytes()), 5);
/// assert_eq!(utf8_strlen(b"A\x80B"), 2);
/// assert_eq!(utf8_strlen(b"ab\0cd"), 2);
/// ```
#[must_use]
pub fn utf8_strlen(s: &[u8]) -> usize {
    let mut walker = CharWalker::new();

    let head_len = s.as_ptr().align_offset(WORD).min(s.len());
    let (head, body) = s.split_at(head_len);
    if !walk_scalar(&mut walker, head) {
        return walker.count();
    }

    let mut words = body.chunks_exact(WORD);
    for chunk in words.by_ref() {
        let mut bytes = [0u8; WORD];
        bytes.copy_from_slice(chunk);
        if step_word(&mut walker, u64::from_le_bytes(bytes)) {
            continue;
        }
        if !walk_scalar(&mut walker, chunk) {
            return walker.count();
        }
    }

    walk_scalar(&mut walker, words.remainder());
    walker.count()
}

/// Counts characters with the scalar walker alone.
///
/// Same result as [`utf8_strlen`]; kept public as the reference the bulk
/// counter is measured against.
#[must_use]
pub fn utf8_strlen_scalar(s: &[u8]) -> usize {
    let mut walker = CharWalker::new();
    walk_scalar(&mut walker, s);
    walker.count()
}

/// Feeds `bytes` to the walker. Returns `false` if a NUL byte was reached.
fn walk_scalar(walker: &mut CharWalker, bytes: &[u8]) -> bool {
    for &byte in bytes {
        if byte == 0 {
            return false;
        }
        walker.step(byte);
    }
    true
}

/// Lanes whose byte is zero get their high bit set.
const fn zero_lanes(word: u64) -> u64 {
    word.wrapping_sub(ONES) & !word & HIGHS
}

/// Moves bit `7 - k` of every lane into the lane's high bit.
const fn bit_from_top(word: u64, k: u32) -> u64 {
    (word << k) & HIGHS
}

/// Advances the walker over one little-endian word without looking at its
/// bytes one by one.
///
/// Lane masks keep one flag per byte in the byte's high bit. Returns `false`
/// and leaves the walker untouched when the word cannot be stepped in bulk:
/// it contains a NUL, or some byte that the walker would consume as the tail
/// of a character is not a continuation byte.
fn step_word(walker: &mut CharWalker, word: u64) -> bool {
    if zero_lanes(word) != 0 {
        return false;
    }

    let t: [u64; 7] = [
        bit_from_top(word, 0),
        bit_from_top(word, 1),
        bit_from_top(word, 2),
        bit_from_top(word, 3),
        bit_from_top(word, 4),
        bit_from_top(word, 5),
        bit_from_top(word, 6),
    ];
    let ascii = !word & HIGHS;
    let continuation = t[0] & !t[1];

    // leads[n] flags lanes holding the lead byte of an (n + 2)-byte character
    let mut leads = [0u64; 5];
    let mut prefix = t[0] & t[1];
    for (n, lead) in leads.iter_mut().enumerate() {
        *lead = prefix & !t[n + 2];
        prefix &= t[n + 2];
    }

    // Lanes the walker will consume as character tails. Bits past the top
    // lane spill into the next word.
    let mut tails: u128 = 0;
    for (n, &lead) in leads.iter().enumerate() {
        for k in 1..=n + 1 {
            tails |= u128::from(lead) << (8 * k);
        }
    }

    let carried = walker.remaining();
    #[allow(clippy::cast_possible_truncation)]
    let mut expected = tails as u64;
    if carried > 0 {
        expected |= HIGHS & ((1u64 << (8 * carried)) - 1);
    }
    if expected & !continuation != 0 {
        return false;
    }

    let spilled = ((tails >> 64) as u64).count_ones() as usize;
    let starters = (ascii | leads.iter().fold(0, |acc, &lead| acc | lead)).count_ones() as usize;

    // A carried character completes inside this word; a spilling one does not.
    let mut count = walker.count() + starters;
    if carried > 0 {
        count += 1;
    }
    if spilled > 0 {
        count -= 1;
    }
    walker.set_state(spilled, count);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(bytes: &[u8; 8]) -> u64 {
        u64::from_le_bytes(*bytes)
    }

    fn scalar_after(walker: CharWalker, bytes: &[u8]) -> CharWalker {
        let mut walker = walker;
        for &b in bytes {
            walker.step(b);
        }
        walker
    }

    #[test]
    fn test_step_word_ascii() {
        let mut walker = CharWalker::new();
        assert!(step_word(&mut walker, word(b"abcdefgh")));
        assert_eq!(walker.count(), 8);
        assert!(walker.at_boundary());
    }

    #[test]
    fn test_step_word_rejects_nul() {
        let mut walker = CharWalker::new();
        assert!(!step_word(&mut walker, word(b"abc\0defg")));
        assert_eq!(walker, CharWalker::new());
    }

    #[test]
    fn test_step_word_two_byte_chars() {
        let bytes: &[u8; 8] = b"\xC3\xA9\xC3\xA9ab\xC3\xA9";
        let mut walker = CharWalker::new();
        assert!(step_word(&mut walker, word(bytes)));
        assert_eq!(walker, scalar_after(CharWalker::new(), bytes));
        assert_eq!(walker.count(), 5);
    }

    #[test]
    fn test_step_word_spills_into_next_word() {
        // "abcde" then the first two bytes of a 4-byte character
        let first: &[u8; 8] = b"abcde\xF0\x9F\x98";
        let second: &[u8; 8] = b"\x80xyzuvwq";

        let mut walker = CharWalker::new();
        assert!(step_word(&mut walker, word(first)));
        assert_eq!(walker.count(), 5);
        assert_eq!(walker.remaining(), 1);

        assert!(step_word(&mut walker, word(second)));
        assert_eq!(walker.count(), 13);
        assert!(walker.at_boundary());
    }

    #[test]
    fn test_step_word_rejects_missing_continuation() {
        let mut walker = CharWalker::new();
        assert!(!step_word(&mut walker, word(b"\xC3abcdefg")));
        assert_eq!(walker, CharWalker::new());
    }

    #[test]
    fn test_step_word_rejects_carried_non_continuation() {
        let mut walker = CharWalker::new();
        walker.step(0xE2);
        let before = walker;
        assert!(!step_word(&mut walker, word(b"\x82abcdefg")));
        assert_eq!(walker, before);
    }

    #[test]
    fn test_step_word_stray_and_invalid_bytes() {
        let bytes: &[u8; 8] = b"a\x80b\xFEc\xFFde";
        let mut walker = CharWalker::new();
        assert!(step_word(&mut walker, word(bytes)));
        assert_eq!(walker, scalar_after(CharWalker::new(), bytes));
        assert_eq!(walker.count(), 5);
    }

    #[test]
    fn test_step_word_six_byte_lead_in_last_lane() {
        let bytes: &[u8; 8] = b"abcdefg\xFC";
        let mut walker = CharWalker::new();
        assert!(step_word(&mut walker, word(bytes)));
        assert_eq!(walker.count(), 7);
        assert_eq!(walker.remaining(), 5);
    }

    #[test]
    fn test_bulk_matches_scalar_at_every_alignment() {
        let mut text = alloc::vec::Vec::new();
        for _ in 0..8 {
            text.extend_from_slice("aé€😀\u{7FF}x".as_bytes());
            text.extend_from_slice(b"\x80\xC3z\xFF\xF8\x88\x88\x88\x88q");
        }
        for start in 0..16 {
            for end in (start..text.len()).step_by(3) {
                let s = &text[start..end];
                assert_eq!(utf8_strlen(s), utf8_strlen_scalar(s), "bytes {start}..{end}");
            }
        }
    }
}
