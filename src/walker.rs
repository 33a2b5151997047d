use crate::classify::{utf8_numbytes, INVALID_CHAR};

/// Character-boundary state machine.
///
/// Fed one byte at a time, the walker tracks how many bytes of the current
/// character are still expected and how many characters have been completed.
/// Continuation bytes are not checked: after a lead byte of length `n`, the
/// next `n - 1` bytes belong to its character whatever they are. A byte that
/// cannot start a character, met at a boundary, is consumed without being
/// counted.
///
/// ```
/// # use utf8_index::CharWalker;
/// let mut walker = CharWalker::new();
/// for &byte in "hé".as_bytes() {
///     walker.step(byte);
/// }
/// assert_eq!(walker.count(), 2);
/// assert!(walker.at_boundary());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CharWalker {
    remaining: usize,
    count: usize,
}

impl CharWalker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            remaining: 0,
            count: 0,
        }
    }

    /// Number of characters fully consumed so far.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Bytes still expected for the character in progress.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// `true` when the next byte starts a new character.
    #[must_use]
    pub const fn at_boundary(&self) -> bool {
        self.remaining == 0
    }

    /// Consumes one byte.
    pub fn step(&mut self, byte: u8) {
        if self.remaining == 0 {
            match utf8_numbytes(byte) {
                1 => self.count += 1,
                // Weird byte: skip it, stay at the boundary
                INVALID_CHAR => {}
                #[allow(clippy::cast_sign_loss)]
                width => self.remaining = (width - 1) as usize,
            }
        } else {
            self.remaining -= 1;
            if self.remaining == 0 {
                self.count += 1;
            }
        }
    }

    /// Steps through `s` starting at byte offset `pos` until `target`
    /// characters are complete or `s` is exhausted.
    ///
    /// Returns the offset of the first byte not consumed. If the count
    /// already reached `target`, nothing is consumed.
    pub fn walk_to(&mut self, s: &[u8], mut pos: usize, target: usize) -> usize {
        while self.count < target {
            let Some(&byte) = s.get(pos) else {
                break;
            };
            self.step(byte);
            pos += 1;
        }
        pos
    }

    pub(crate) fn set_state(&mut self, remaining: usize, count: usize) {
        self.remaining = remaining;
        self.count = count;
    }
}

/// The logical extent of a byte string: everything before the first NUL.
#[must_use]
pub fn terminated(s: &[u8]) -> &[u8] {
    match s.iter().position(|&b| b == 0) {
        Some(nul) => s.get(..nul).unwrap_or(s),
        None => s,
    }
}

/// Converts a 1-based character index to a count of characters, mapping
/// zero and negative values to 0.
pub(crate) fn clamp_index(index: i64) -> usize {
    if index <= 0 {
        0
    } else {
        usize::try_from(index).unwrap_or(usize::MAX)
    }
}
