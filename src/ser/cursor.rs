use std::io;

use super::error::{SerError, SerKind, SerResult};

/// Simple cursor over a byte slice.
///
/// Implements [`io::Read`] so the stream decoders can run over an in-memory
/// buffer while the caller keeps track of how much input was consumed.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new cursor over the provided byte slice.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Returns the number of bytes remaining in the cursor.
    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.offset)
    }

    /// Fails with [`SerError::TrailingBytes`] unless every byte was consumed.
    pub fn ensure_consumed(&self, kind: SerKind) -> SerResult<()> {
        match self.remaining() {
            0 => Ok(()),
            remaining => Err(SerError::trailing_bytes(kind, self.offset, remaining)),
        }
    }
}

impl io::Read for ByteReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.remaining());
        buf[..n].copy_from_slice(&self.bytes[self.offset..self.offset + n]);
        self.offset += n;
        Ok(n)
    }
}
