use thiserror::Error;

/// Error types for the checked `try_*` operations of
/// [`Utf8Bytes`](crate::Utf8Bytes).
///
/// The `utf8_*` functions never fail; they answer out-of-range requests with
/// an empty string or index 0.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// Character index outside `1..=length`
    #[error("Index out of range: character {index} of a {length}-character string")]
    IndexOutOfRange {
        /// Index that was requested
        index: i64,
        /// Number of characters in the string
        length: usize,
    },
    /// Range bounds that do not describe a range
    #[error("Invalid range: {lower}..{upper}")]
    InvalidRange {
        /// First character of the range
        lower: i64,
        /// Last character of the range
        upper: i64,
    },
    /// Byte position outside `1..=length`
    #[error("Byte offset out of range: byte {offset} of a {length}-byte string")]
    ByteOffsetOutOfRange {
        /// Position that was requested
        offset: i64,
        /// Number of bytes in the string
        length: usize,
    },
    /// Needle does not occur in the haystack
    #[error("Substring not found")]
    NotFound,
}

pub type Result<T> = core::result::Result<T, Error>;
