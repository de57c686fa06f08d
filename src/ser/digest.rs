use std::io::{Read, Write};

use super::error::{SerError, SerKind, SerResult};

/// Width of every fixed-size hash on the wire.
pub const DIGEST_SIZE: usize = 32;

/// Writes a raw digest to the sink.
pub fn write_digest<W: Write>(
    w: &mut W,
    digest: &[u8; DIGEST_SIZE],
    kind: SerKind,
    field: &'static str,
) -> SerResult<()> {
    w.write_all(digest)
        .map_err(|err| SerError::from_io(kind, field, err))
}

/// Reads a raw digest from the source.
pub fn read_digest<R: Read>(
    r: &mut R,
    kind: SerKind,
    field: &'static str,
) -> SerResult<[u8; DIGEST_SIZE]> {
    let mut out = [0u8; DIGEST_SIZE];
    r.read_exact(&mut out)
        .map_err(|err| SerError::from_io(kind, field, err))?;
    Ok(out)
}
