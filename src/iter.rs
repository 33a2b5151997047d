use core::iter::FusedIterator;

use crate::walker::{terminated, CharWalker};

/// Iterator over the characters of a byte string, each yielded as the
/// sub-slice of bytes that encodes it.
///
/// Weird bytes are yielded together with the character after them, the same
/// boundaries `utf8_substr(s, i, i)` uses. Trailing bytes that never complete
/// a character are not yielded.
///
/// This iterator implements `Clone`.
#[derive(Debug, Clone)]
pub struct Chars<'a> {
    rest: &'a [u8],
}

impl<'a> Chars<'a> {
    pub(crate) fn new(s: &'a [u8]) -> Self {
        Self { rest: s }
    }

    /// The bytes not yet consumed by the iterator.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.rest
    }
}

impl<'a> Iterator for Chars<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let mut walker = CharWalker::new();
        let end = walker.walk_to(self.rest, 0, 1);
        if walker.count() == 0 {
            self.rest = &[];
            return None;
        }
        let (current, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Weird bytes yield nothing, so there is no useful lower bound
        (0, Some(self.rest.len()))
    }
}

impl FusedIterator for Chars<'_> {}

/// Returns an iterator over the characters of `s`, stopping at the first NUL.
///
/// ```
/// # use utf8_index::utf8_chars;
/// let chars: Vec<&[u8]> = utf8_chars("hé€".as_bytes()).collect();
/// assert_eq!(chars, ["h".as_bytes(), "é".as_bytes(), "€".as_bytes()]);
/// ```
#[must_use]
pub fn utf8_chars(s: &[u8]) -> Chars<'_> {
    Chars::new(terminated(s))
}
