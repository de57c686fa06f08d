//! Bitcoin CompactSize variable-length integers.
//!
//! | value range               | encoding           |
//! |---------------------------|--------------------|
//! | `0 ..= 0xfc`              | 1 byte             |
//! | `0xfd ..= 0xffff`         | `0xfd` + `u16` LE  |
//! | `0x1_0000 ..= 0xffff_ffff`| `0xfe` + `u32` LE  |
//! | larger                    | `0xff` + `u64` LE  |
//!
//! Decoding is strict: a discriminant whose payload fits a shorter form is
//! rejected as non-canonical.

use std::io::{Read, Write};

use super::error::{SerError, SerKind, SerResult};

const TAG_U16: u8 = 0xfd;
const TAG_U32: u8 = 0xfe;
const TAG_U64: u8 = 0xff;

/// Returns the number of bytes [`write_varint`] emits for `value`.
pub fn varint_size(value: u64) -> usize {
    match value {
        v if v < TAG_U16 as u64 => 1,
        v if v <= u16::MAX as u64 => 3,
        v if v <= u32::MAX as u64 => 5,
        _ => 9,
    }
}

/// Writes `value` in CompactSize form.
pub fn write_varint<W: Write>(
    w: &mut W,
    value: u64,
    kind: SerKind,
    field: &'static str,
) -> SerResult<()> {
    let result = match value {
        v if v < TAG_U16 as u64 => w.write_all(&[v as u8]),
        v if v <= u16::MAX as u64 => w
            .write_all(&[TAG_U16])
            .and_then(|()| w.write_all(&(v as u16).to_le_bytes())),
        v if v <= u32::MAX as u64 => w
            .write_all(&[TAG_U32])
            .and_then(|()| w.write_all(&(v as u32).to_le_bytes())),
        v => w
            .write_all(&[TAG_U64])
            .and_then(|()| w.write_all(&v.to_le_bytes())),
    };
    result.map_err(|err| SerError::from_io(kind, field, err))
}

/// Reads a CompactSize value, rejecting non-canonical encodings.
pub fn read_varint<R: Read>(r: &mut R, kind: SerKind, field: &'static str) -> SerResult<u64> {
    let tag = read_array::<1, R>(r, kind, field)?[0];
    let (value, min) = match tag {
        TAG_U16 => (
            u16::from_le_bytes(read_array::<2, R>(r, kind, field)?) as u64,
            TAG_U16 as u64,
        ),
        TAG_U32 => (
            u32::from_le_bytes(read_array::<4, R>(r, kind, field)?) as u64,
            0x1_0000,
        ),
        TAG_U64 => (
            u64::from_le_bytes(read_array::<8, R>(r, kind, field)?),
            0x1_0000_0000,
        ),
        small => return Ok(small as u64),
    };

    if value < min {
        tracing::debug!(%kind, field, value, tag, "rejecting non-canonical varint");
        return Err(SerError::invalid_value(
            kind,
            field,
            format!(
                "non-canonical varint {value:x} - discriminant {tag:x} must encode a value greater than {min:x}"
            ),
        ));
    }
    Ok(value)
}

/// Reads a CompactSize value and performs a checked conversion to `T`.
pub fn read_varint_t<R, T>(r: &mut R, kind: SerKind, field: &'static str) -> SerResult<T>
where
    R: Read,
    T: TryFrom<u64>,
{
    let value = read_varint(r, kind, field)?;
    T::try_from(value).map_err(|_| {
        SerError::invalid_value(
            kind,
            field,
            format!(
                "value {value} exceeds range of {}",
                core::any::type_name::<T>()
            ),
        )
    })
}

fn read_array<const N: usize, R: Read>(
    r: &mut R,
    kind: SerKind,
    field: &'static str,
) -> SerResult<[u8; N]> {
    let mut buf = [0u8; N];
    r.read_exact(&mut buf)
        .map_err(|err| SerError::from_io(kind, field, err))?;
    Ok(buf)
}
