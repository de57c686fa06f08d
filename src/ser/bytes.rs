use std::io::{Read, Write};

use super::error::{SerError, SerKind, SerResult};
use super::varint::{read_varint, varint_size, write_varint};

/// Writes raw bytes to the sink.
pub fn write_bytes<W: Write>(
    w: &mut W,
    bytes: &[u8],
    kind: SerKind,
    field: &'static str,
) -> SerResult<()> {
    w.write_all(bytes)
        .map_err(|err| SerError::from_io(kind, field, err))
}

/// Writes a varint length prefix followed by the provided bytes.
pub fn write_var_bytes<W: Write>(
    w: &mut W,
    bytes: &[u8],
    kind: SerKind,
    field: &'static str,
) -> SerResult<()> {
    write_varint(w, bytes.len() as u64, kind, field)?;
    write_bytes(w, bytes, kind, field)
}

/// Reads a varint length prefix and returns the owned payload bytes.
///
/// The length is checked against `max_len` before anything is allocated.
pub fn read_var_bytes<R: Read>(
    r: &mut R,
    max_len: usize,
    kind: SerKind,
    field: &'static str,
) -> SerResult<Vec<u8>> {
    let len = read_varint(r, kind, field)?;
    if len > max_len as u64 {
        tracing::debug!(%kind, field, len, max_len, "rejecting oversized byte string");
        return Err(SerError::invalid_length(kind, field, len, max_len as u64));
    }
    let mut out = vec![0u8; len as usize];
    r.read_exact(&mut out)
        .map_err(|err| SerError::from_io(kind, field, err))?;
    Ok(out)
}

/// Number of bytes [`write_var_bytes`] emits for a payload of `len` bytes.
pub fn var_bytes_size(len: usize) -> usize {
    varint_size(len as u64) + len
}
