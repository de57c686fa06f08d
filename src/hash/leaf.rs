use core::fmt;
use std::io;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512_256};

use super::identifier::HexOutput;
use crate::ser::DIGEST_SIZE;

/// Digest committing to a leaf's canonical serialization.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct LeafHash([u8; DIGEST_SIZE]);

impl LeafHash {
    /// Wraps raw digest bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns the raw digest bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Consumes the digest and returns the underlying byte array.
    pub const fn into_bytes(self) -> [u8; DIGEST_SIZE] {
        self.0
    }

    /// Lowercase hex in natural byte order.
    pub fn to_hex(&self) -> HexOutput {
        HexOutput(self.0)
    }
}

impl From<LeafHash> for [u8; DIGEST_SIZE] {
    fn from(hash: LeafHash) -> Self {
        hash.0
    }
}

impl fmt::Display for LeafHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_hex(), f)
    }
}

impl fmt::Debug for LeafHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LeafHash(0x{})", self.to_hex())
    }
}

/// Streaming SHA-512/256 hasher fed with a leaf's canonical encoding.
///
/// SHA-512/256 is the FIPS 180-4 truncation of SHA-512 with its own initial
/// values, not SHA-512 cut to 32 bytes. Leaf commitments depend on this exact
/// function.
#[derive(Clone, Default)]
pub struct LeafHasher {
    inner: Sha512_256,
    written: usize,
}

impl LeafHasher {
    /// Creates an empty hasher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorbs additional bytes.
    pub fn update(&mut self, bytes: &[u8]) {
        self.inner.update(bytes);
        self.written += bytes.len();
    }

    /// Number of bytes absorbed so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Finalises the hasher.
    pub fn finalize(self) -> LeafHash {
        LeafHash(self.inner.finalize().into())
    }
}

impl io::Write for LeafHasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
