//! Contains the Error and Result type used by the decoder.
use std::fmt::Display;

use crate::TagId;

/// An error that occurred while decoding NBT. Decoding never returns a partial
/// tree, so any error means the whole input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
    offset: usize,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

/// The category of a decode error.
///
/// [`ErrorKind::UnexpectedEof`] means the input was truncated. Every other kind
/// means the bytes that were present violate the NBT grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Fewer bytes remained than the field being read declares.
    UnexpectedEof,

    /// An array or list declared a negative element count.
    NegativeLength(i32),

    /// An array or list declared more elements than
    /// [`DeOpts::max_seq_len`][crate::DeOpts::max_seq_len] allows.
    LengthTooLarge(usize),

    /// A tag type byte outside of 0 to 12.
    InvalidTag(u8),

    /// An End tag was used where a value is required, eg as the element type
    /// of a non-empty list.
    UnexpectedEnd,

    /// The document did not start with a compound tag. Contains the first
    /// byte of the input.
    NoRootCompound(u8),

    /// Nesting of lists and compounds went beyond
    /// [`DeOpts::max_depth`][crate::DeOpts::max_depth].
    TooDeep(usize),

    /// Bytes remained after the root compound, and the options forbid it.
    /// Contains the number of unread bytes.
    TrailingData(usize),
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (at byte offset {})", self.msg, self.offset)
    }
}

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Offset into the input at which the failing read started.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether the input simply ran out, rather than being malformed.
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, ErrorKind::UnexpectedEof)
    }

    pub(crate) fn unexpected_eof(offset: usize, wanted: usize, remaining: usize) -> Error {
        Error {
            msg: format!(
                "eof: unexpectedly ran out of input, needed {} bytes but {} remain",
                wanted, remaining
            ),
            kind: ErrorKind::UnexpectedEof,
            offset,
        }
    }

    pub(crate) fn negative_length(offset: usize, len: i32) -> Error {
        Error {
            msg: format!("invalid nbt: negative length {}", len),
            kind: ErrorKind::NegativeLength(len),
            offset,
        }
    }

    pub(crate) fn length_too_large(offset: usize, len: usize, max: usize) -> Error {
        Error {
            msg: format!(
                "size ({}) greater than max sequence length ({})",
                len, max
            ),
            kind: ErrorKind::LengthTooLarge(len),
            offset,
        }
    }

    pub(crate) fn invalid_tag(offset: usize, tag: u8) -> Error {
        Error {
            msg: format!("invalid nbt tag value: {}", tag),
            kind: ErrorKind::InvalidTag(tag),
            offset,
        }
    }

    pub(crate) fn unexpected_end(offset: usize) -> Error {
        Error {
            msg: "unexpected end tag, was expecting payload of a value".to_owned(),
            kind: ErrorKind::UnexpectedEnd,
            offset,
        }
    }

    pub(crate) fn no_root_compound(first: u8) -> Error {
        let msg = match TagId::try_from(first) {
            Ok(id) => format!("invalid nbt: no root compound, found {}", id),
            Err(()) => format!("invalid nbt: no root compound, found byte {:#04x}", first),
        };
        Error {
            msg,
            kind: ErrorKind::NoRootCompound(first),
            offset: 0,
        }
    }

    pub(crate) fn compressed_input(first: u8, format: &str) -> Error {
        Error {
            msg: format!(
                "invalid nbt: no root compound, input looks {} compressed, decompress it first",
                format
            ),
            kind: ErrorKind::NoRootCompound(first),
            offset: 0,
        }
    }

    pub(crate) fn too_deep(offset: usize, max: usize) -> Error {
        Error {
            msg: format!("nbt nested deeper than the maximum depth of {}", max),
            kind: ErrorKind::TooDeep(max),
            offset,
        }
    }

    pub(crate) fn trailing_data(offset: usize, remaining: usize) -> Error {
        Error {
            msg: format!("{} bytes of trailing data after root compound", remaining),
            kind: ErrorKind::TrailingData(remaining),
            offset,
        }
    }
}
