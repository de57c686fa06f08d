//! Canonical serialization primitives.
//!
//! The helpers in this module implement the Bitcoin wire idioms the leaf
//! formats are built from: CompactSize varints, varint-prefixed byte strings
//! and raw 32-byte digests. Encoders write into any [`std::io::Write`] sink and
//! decoders read from any [`std::io::Read`] source; [`ByteReader`] is the
//! in-memory source used when the caller also needs to know how much input was
//! consumed.

mod bytes;
mod cursor;
mod digest;
mod error;
mod varint;

pub use bytes::{read_var_bytes, var_bytes_size, write_bytes, write_var_bytes};
pub use cursor::ByteReader;
pub use digest::{read_digest, write_digest, DIGEST_SIZE};
pub use error::{SerError, SerKind, SerResult};
pub use varint::{read_varint, read_varint_t, varint_size, write_varint};
