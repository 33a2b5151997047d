//! Lead-byte classification.

/// Returned by [`utf8_numbytes`] for a byte that cannot start a character.
pub const INVALID_CHAR: i32 = -1;

/// Returns the number of bytes of the character that starts with `byte`.
///
/// The legacy 5- and 6-byte forms are recognised. A bare continuation byte
/// (`10xxxxxx`), `0xFE` and `0xFF` give [`INVALID_CHAR`].
///
/// ```
/// # use utf8_index::{utf8_numbytes, INVALID_CHAR};
/// assert_eq!(utf8_numbytes(b'a'), 1);
/// assert_eq!(utf8_numbytes(0xC3), 2);
/// assert_eq!(utf8_numbytes(0xE2), 3);
/// assert_eq!(utf8_numbytes(0xA9), INVALID_CHAR);
/// ```
#[must_use]
pub const fn utf8_numbytes(byte: u8) -> i32 {
    if byte & 0x80 == 0 {
        1
    } else if byte & 0xE0 == 0xC0 {
        2
    } else if byte & 0xF0 == 0xE0 {
        3
    } else if byte & 0xF8 == 0xF0 {
        4
    } else if byte & 0xFC == 0xF8 {
        5
    } else if byte & 0xFE == 0xFC {
        6
    } else {
        INVALID_CHAR
    }
}

/// `true` for `10xxxxxx`.
#[must_use]
pub const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}
