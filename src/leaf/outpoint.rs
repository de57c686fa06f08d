use core::fmt;
use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::hash::Hash;
use crate::ser::{
    read_digest, read_varint_t, varint_size, write_digest, write_varint, SerKind, SerResult,
    DIGEST_SIZE,
};

/// Reference to a transaction output: the transaction id plus output index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct OutPoint {
    /// Id of the transaction that created the output.
    pub hash: Hash,
    /// Position of the output within that transaction.
    pub index: u32,
}

impl OutPoint {
    /// Creates an outpoint.
    pub const fn new(hash: Hash, index: u32) -> Self {
        Self { hash, index }
    }

    /// Encoded width: raw txid followed by the varint index.
    pub fn serialize_size(&self) -> usize {
        DIGEST_SIZE + varint_size(self.index as u64)
    }

    pub(crate) fn write_to<W: Write>(&self, w: &mut W, kind: SerKind) -> SerResult<()> {
        write_digest(w, self.hash.as_bytes(), kind, "tx hash")?;
        write_varint(w, self.index as u64, kind, "vout")
    }

    pub(crate) fn read_from<R: Read>(r: &mut R, kind: SerKind) -> SerResult<Self> {
        let hash = Hash::from_bytes(read_digest(r, kind, "tx hash")?);
        let index = read_varint_t::<_, u32>(r, kind, "vout")?;
        Ok(Self { hash, index })
    }

    /// Encodes the outpoint on its own.
    pub fn serialize<W: Write>(&self, w: &mut W) -> SerResult<()> {
        self.write_to(w, SerKind::OutPoint)
    }

    /// Decodes an outpoint written by [`OutPoint::serialize`].
    pub fn deserialize<R: Read>(r: &mut R) -> SerResult<Self> {
        Self::read_from(r, SerKind::OutPoint)
    }
}

impl fmt::Display for OutPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.hash, self.index)
    }
}
