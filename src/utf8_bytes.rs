use alloc::vec::Vec;

use crate::convert::utf8_convert_index;
use crate::error::{Error, Result};
use crate::iter::Chars;
use crate::length::utf8_strlen;
use crate::rangeset::utf8_strrangeset;
use crate::search::{utf8_strindex, utf8_strrindex};
use crate::substr::utf8_substr;
use crate::walker::terminated;

/// Letter case handling for searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Case {
    #[default]
    Sensitive,
    /// ASCII letters match regardless of case
    Insensitive,
}

impl Case {
    fn matters(self) -> bool {
        self == Case::Sensitive
    }
}

/// A borrowed byte string addressed by character position.
///
/// The view ends at the first NUL byte of the slice it was made from. The
/// plain methods keep the sentinel conventions of the `utf8_*` functions;
/// the `try_*` methods report the same conditions as [`Error`]s.
///
/// ```
/// # use utf8_index::{Case, Utf8Bytes};
/// let s = Utf8Bytes::from("Grüße, Welt");
/// assert_eq!(s.len_chars(), 11);
/// assert_eq!(s.char_at(3), "ü".as_bytes());
/// assert_eq!(s.find(b"welt", Case::Insensitive), 8);
/// assert!(s.try_char_at(12).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Utf8Bytes<'a> {
    bytes: &'a [u8],
}

impl<'a> Utf8Bytes<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes: terminated(bytes),
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Number of characters. See [`utf8_strlen`].
    #[must_use]
    pub fn len_chars(&self) -> usize {
        utf8_strlen(self.bytes)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[must_use]
    pub fn chars(&self) -> Chars<'a> {
        Chars::new(self.bytes)
    }

    #[must_use]
    pub fn substr(&self, lower: i64, upper: i64) -> Vec<u8> {
        utf8_substr(self.bytes, lower, upper)
    }

    #[must_use]
    pub fn char_at(&self, index: i64) -> Vec<u8> {
        utf8_substr(self.bytes, index, index)
    }

    #[must_use]
    pub fn replace_range(&self, from: i64, to: i64, replacement: &[u8]) -> Vec<u8> {
        utf8_strrangeset(self.bytes, from, to, replacement)
    }

    #[must_use]
    pub fn replace_char(&self, index: i64, replacement: &[u8]) -> Vec<u8> {
        utf8_strrangeset(self.bytes, index, index, replacement)
    }

    /// Index of the first occurrence of `needle`, 0 if none.
    #[must_use]
    pub fn find(&self, needle: &[u8], case: Case) -> usize {
        utf8_strindex(self.bytes, needle, case.matters())
    }

    /// Index of the last occurrence of `needle`, 0 if none.
    #[must_use]
    pub fn rfind(&self, needle: &[u8], case: Case) -> usize {
        utf8_strrindex(self.bytes, needle, case.matters())
    }

    #[must_use]
    pub fn char_index_of_byte(&self, byte_pos: i64) -> i64 {
        utf8_convert_index(byte_pos, self.bytes)
    }

    /// Character count as a signed index bound.
    fn char_bound(&self) -> (usize, i64) {
        let length = self.len_chars();
        (length, i64::try_from(length).unwrap_or(i64::MAX))
    }

    /// The character at `index`.
    ///
    /// # Errors
    ///
    /// `Error::IndexOutOfRange` unless `1 <= index <= len_chars()`.
    pub fn try_char_at(&self, index: i64) -> Result<Vec<u8>> {
        let (length, bound) = self.char_bound();
        if index < 1 || index > bound {
            tracing::trace!(index, length, "character index out of range");
            return Err(Error::IndexOutOfRange { index, length });
        }
        Ok(self.char_at(index))
    }

    /// The characters `lower..=upper`. `upper == lower - 1` is the empty
    /// range at `lower`.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidRange` if `lower < 1` or `upper < lower - 1`
    /// - `Error::IndexOutOfRange` if `upper > len_chars()`
    pub fn try_substr(&self, lower: i64, upper: i64) -> Result<Vec<u8>> {
        check_range(lower, upper)?;
        let (length, bound) = self.char_bound();
        if upper > bound {
            tracing::trace!(upper, length, "range end out of range");
            return Err(Error::IndexOutOfRange {
                index: upper,
                length,
            });
        }
        if upper < lower {
            return Ok(Vec::new());
        }
        Ok(self.substr(lower, upper))
    }

    /// Replaces the characters `from..=to`. `to == from - 1` inserts before
    /// `from`.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidRange` if `from < 1` or `to < from - 1`
    /// - `Error::IndexOutOfRange` if `to > len_chars()`
    pub fn try_replace_range(&self, from: i64, to: i64, replacement: &[u8]) -> Result<Vec<u8>> {
        check_range(from, to)?;
        let (length, bound) = self.char_bound();
        if to > bound {
            tracing::trace!(to, length, "replacement range end out of range");
            return Err(Error::IndexOutOfRange { index: to, length });
        }
        Ok(self.replace_range(from, to, replacement))
    }

    /// Index of the first occurrence of `needle`.
    ///
    /// # Errors
    ///
    /// `Error::NotFound` if `needle` does not occur.
    pub fn try_find(&self, needle: &[u8], case: Case) -> Result<usize> {
        found(self.find(needle, case))
    }

    /// Index of the last occurrence of `needle`.
    ///
    /// # Errors
    ///
    /// `Error::NotFound` if `needle` does not occur.
    pub fn try_rfind(&self, needle: &[u8], case: Case) -> Result<usize> {
        found(self.rfind(needle, case))
    }

    /// Index of the character holding the 1-based byte position `byte_pos`.
    ///
    /// # Errors
    ///
    /// `Error::ByteOffsetOutOfRange` unless `1 <= byte_pos <= as_bytes().len()`.
    pub fn try_char_index_of_byte(&self, byte_pos: i64) -> Result<i64> {
        let length = self.bytes.len();
        let in_range = usize::try_from(byte_pos).is_ok_and(|pos| (1..=length).contains(&pos));
        if !in_range {
            tracing::trace!(byte_pos, length, "byte offset out of range");
            return Err(Error::ByteOffsetOutOfRange {
                offset: byte_pos,
                length,
            });
        }
        Ok(self.char_index_of_byte(byte_pos))
    }
}

fn check_range(lower: i64, upper: i64) -> Result<()> {
    if lower < 1 || upper < lower - 1 {
        tracing::trace!(lower, upper, "invalid character range");
        return Err(Error::InvalidRange { lower, upper });
    }
    Ok(())
}

fn found(index: usize) -> Result<usize> {
    if index == 0 {
        Err(Error::NotFound)
    } else {
        Ok(index)
    }
}

impl<'a> From<&'a [u8]> for Utf8Bytes<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'a> From<&'a str> for Utf8Bytes<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl<'a> IntoIterator for Utf8Bytes<'a> {
    type Item = &'a [u8];
    type IntoIter = Chars<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.chars()
    }
}
