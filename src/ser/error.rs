use core::fmt;
use std::io;

use serde::{Deserialize, Serialize};

/// Context markers used when reporting serialization failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SerKind {
    /// Full (canonical) leaf data framing.
    Leaf,
    /// Compact leaf data framing without the outpoint.
    CompactLeaf,
    /// Standalone outpoint encoding.
    OutPoint,
    /// Variable-length integer primitive.
    VarInt,
    /// Length-prefixed byte string primitive.
    VarBytes,
}

impl fmt::Display for SerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerKind::Leaf => write!(f, "leaf data"),
            SerKind::CompactLeaf => write!(f, "compact leaf data"),
            SerKind::OutPoint => write!(f, "outpoint"),
            SerKind::VarInt => write!(f, "varint"),
            SerKind::VarBytes => write!(f, "varbytes"),
        }
    }
}

/// Canonical serialization error surfaced while encoding or decoding data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SerError {
    /// Input ended before the expected number of bytes were read.
    UnexpectedEnd {
        /// Structure or section that failed to decode.
        kind: SerKind,
        /// Field that was being processed.
        field: &'static str,
    },
    /// A length exceeded the allowed maximum.
    InvalidLength {
        /// Structure or section that failed to encode or decode.
        kind: SerKind,
        /// Field that was being processed.
        field: &'static str,
        /// Length found in the record or on the wire.
        len: u64,
        /// Largest length accepted for the field.
        max: u64,
    },
    /// Encountered a non-canonical or out-of-range value.
    InvalidValue {
        /// Structure or section that failed to encode or decode.
        kind: SerKind,
        /// Field that was being processed.
        field: &'static str,
        /// Human readable detail.
        detail: String,
    },
    /// Additional bytes remained after consuming the expected payload.
    TrailingBytes {
        /// Structure or section that failed to decode.
        kind: SerKind,
        /// Position reached by the decoder.
        consumed: usize,
        /// Number of remaining bytes.
        remaining: usize,
    },
    /// The byte sink or source failed for a reason other than end of input.
    Io {
        /// Structure or section being processed.
        kind: SerKind,
        /// Field that was being processed.
        field: &'static str,
        /// Rendered I/O error.
        message: String,
    },
}

impl SerError {
    /// Creates an unexpected-end error helper.
    pub fn unexpected_end(kind: SerKind, field: &'static str) -> Self {
        SerError::UnexpectedEnd { kind, field }
    }

    /// Creates an invalid-length error helper.
    pub fn invalid_length(kind: SerKind, field: &'static str, len: u64, max: u64) -> Self {
        SerError::InvalidLength {
            kind,
            field,
            len,
            max,
        }
    }

    /// Creates an invalid-value error helper.
    pub fn invalid_value(kind: SerKind, field: &'static str, detail: impl Into<String>) -> Self {
        SerError::InvalidValue {
            kind,
            field,
            detail: detail.into(),
        }
    }

    /// Creates a trailing-bytes error helper.
    pub fn trailing_bytes(kind: SerKind, consumed: usize, remaining: usize) -> Self {
        SerError::TrailingBytes {
            kind,
            consumed,
            remaining,
        }
    }

    /// Maps an I/O failure from a sink or source. End of input becomes
    /// [`SerError::UnexpectedEnd`].
    pub fn from_io(kind: SerKind, field: &'static str, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => SerError::UnexpectedEnd { kind, field },
            _ => SerError::Io {
                kind,
                field,
                message: err.to_string(),
            },
        }
    }

    /// Returns the serialization context associated with the error.
    pub fn kind(&self) -> SerKind {
        match *self {
            SerError::UnexpectedEnd { kind, .. }
            | SerError::InvalidLength { kind, .. }
            | SerError::InvalidValue { kind, .. }
            | SerError::TrailingBytes { kind, .. }
            | SerError::Io { kind, .. } => kind,
        }
    }
}

impl fmt::Display for SerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerError::UnexpectedEnd { kind, field } => {
                write!(f, "{kind}: unexpected end of input while reading {field}")
            }
            SerError::InvalidLength {
                kind,
                field,
                len,
                max,
            } => write!(
                f,
                "{kind}: {field} is larger than the max allowed size [count {len}, max {max}]"
            ),
            SerError::InvalidValue {
                kind,
                field,
                detail,
            } => write!(f, "{kind}: invalid {field}: {detail}"),
            SerError::TrailingBytes {
                kind,
                consumed,
                remaining,
            } => write!(
                f,
                "{kind}: {remaining} trailing bytes after {consumed} consumed"
            ),
            SerError::Io {
                kind,
                field,
                message,
            } => write!(f, "{kind}: i/o failure on {field}: {message}"),
        }
    }
}

impl std::error::Error for SerError {}

/// Convenient alias for serialization results.
pub type SerResult<T> = core::result::Result<T, SerError>;
