#![no_std]

//! `utf8_index`: character-indexed access to byte strings that may not be valid UTF-8.
//!
//! Callers address, extract, replace and search text by **character
//! position** while the data stays a plain byte buffer. Characters are
//! decoded on the fly from their lead byte; nothing is validated up front and
//! nothing is rejected.
//!
//! # Conventions
//!
//! - Character indices are 1-based. Byte offsets are only exposed by
//!   [`utf8_convert_index`], which takes a 1-based byte position.
//! - A byte string ends at its first NUL byte, or at the end of the slice.
//! - Every function returning bytes returns a fresh `Vec<u8>` sized to its
//!   contents; inputs are never modified.
//! - Out-of-range requests are not errors: extraction gives an empty string,
//!   searches give 0, classification gives [`INVALID_CHAR`]. The checked
//!   `try_*` methods of [`Utf8Bytes`] report the same conditions as [`Error`].
//!
//! # Malformed input
//!
//! A lead byte announces the length of its character (1 to 6 bytes,
//! including the legacy 5- and 6-byte forms). The bytes that follow are taken
//! as the rest of the character without being checked. A byte that cannot
//! start a character (`10xxxxxx`, `0xFE`, `0xFF`) found where a character
//! should start is skipped: it keeps its place in the bytes but is not
//! counted as a character.
//!
//! ```
//! # use utf8_index::{utf8_strlen, utf8_substr};
//! let s = b"A\x80B";
//! assert_eq!(utf8_strlen(s), 2);
//! assert_eq!(utf8_substr(s, 2, 2), b"\x80B");
//! ```
//!
//! # Operations
//!
//! ```
//! # use utf8_index::*;
//! let s = "héllo wörld".as_bytes();
//!
//! assert_eq!(utf8_strlen(s), 11);
//! assert_eq!(utf8_index(s, 2), "é".as_bytes());
//! assert_eq!(utf8_substr(s, 7, 11), "wörld".as_bytes());
//! assert_eq!(utf8_strrangeset(s, 1, 5, b"hi"), "hi wörld".as_bytes());
//! assert_eq!(utf8_copyandset(s, 8, b"o"), "héllo world".as_bytes());
//! assert_eq!(utf8_strindex(s, b"L", false), 3);
//! assert_eq!(utf8_strrindex(s, b"l", true), 10);
//! assert_eq!(utf8_convert_index(4, s), 3);
//! ```
//!
//! # Performance Characteristics
//!
//! - [`utf8_strlen`]: O(n), stepping aligned 8-byte words with bitwise
//!   arithmetic and falling back to the scalar walker for the unaligned head,
//!   the tail and any word that is not well formed.
//! - Extraction, replacement and conversion: O(n), one scalar pass.
//! - Searches: O(n·m) for a haystack of n bytes and a needle of m bytes.
//!
//! ## `no_std` Compatibility
//!
//! The crate uses only `core` and `alloc`. Enable the `std` feature to build
//! `thiserror` and `tracing` against `std`:
//! ```toml
//! [dependencies]
//! utf8_index = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod classify;
mod convert;
mod error;
mod iter;
mod length;
mod rangeset;
mod search;
mod substr;
mod utf8_bytes;
mod walker;

pub use classify::{is_continuation, utf8_numbytes, INVALID_CHAR};
pub use convert::utf8_convert_index;
pub use error::{Error, Result};
pub use iter::{utf8_chars, Chars};
pub use length::{utf8_strlen, utf8_strlen_scalar};
pub use rangeset::{utf8_copyandset, utf8_strrangeset};
pub use search::{utf8_strindex, utf8_strrindex};
pub use substr::{utf8_index, utf8_substr};
pub use utf8_bytes::{Case, Utf8Bytes};
pub use walker::{terminated, CharWalker};
