//! Canonical leaf serialization, the input of the leaf hash.
//!
//! ```text
//! Field              Type       Size
//! outpoint           -          33-41
//!   tx hash          [32]byte   32
//!   vout             varint     variable
//! stxo               -          variable
//!   header code      varint     variable
//!   amount           varint     variable
//!   pkscript length  varint     variable
//!   pkscript         []byte     variable
//! ```
//!
//! The block hash belongs to the leaf data but is not written yet. Size
//! accounting still reserves its 32 bytes.

use std::io::{Read, Write};

use super::compact::CompactLeaf;
use super::record::LeafRecord;
use crate::config::CodecLimits;
use crate::hash::{Hash, LeafHash, LeafHasher};
use crate::leaf::outpoint::OutPoint;
use crate::ser::{varint_size, ByteReader, SerKind, SerResult, DIGEST_SIZE};

/// Bytes by which [`LeafRecord::serialize_size`] exceeds what
/// [`LeafRecord::serialize`] writes: the reserved, unwritten block hash.
pub const BLOCK_HASH_SIZE_DISCREPANCY: usize = DIGEST_SIZE;

impl LeafRecord {
    /// Size reserved for the canonical encoding.
    ///
    /// Counts the block hash and the txid even though only the txid is
    /// written, so the result is [`BLOCK_HASH_SIZE_DISCREPANCY`] bytes larger
    /// than the output of [`LeafRecord::serialize`].
    pub fn serialize_size(&self) -> usize {
        let mut size = 0;
        size += varint_size(self.outpoint.index as u64);
        size += varint_size(self.header_code().raw());
        size += varint_size(self.amount as u64);
        size += varint_size(self.pk_script.len() as u64);

        // block hash + tx hash + pkscript + varints
        DIGEST_SIZE + DIGEST_SIZE + self.pk_script.len() + size
    }

    /// Writes the canonical encoding to `w`.
    ///
    /// # Panics
    ///
    /// Panics if the outpoint transaction id is all zeroes. Such a record can
    /// only come from a wiring bug upstream and would commit to an ambiguous
    /// leaf; use [`LeafRecord::validate`] first when unsure.
    pub fn serialize<W: Write>(&self, w: &mut W) -> SerResult<()> {
        assert!(
            !self.outpoint.hash.is_zero(),
            "leaf outpoint transaction id must not be zero"
        );
        self.check_stxo(SerKind::Leaf)?;

        self.outpoint.write_to(w, SerKind::Leaf)?;
        self.write_stxo(w, SerKind::Leaf)?;
        tracing::trace!(
            outpoint = %self.outpoint,
            header_code = self.header_code().raw(),
            script_len = self.pk_script.len(),
            "serialized leaf"
        );
        Ok(())
    }

    /// Reads a canonical encoding from `r` with the consensus limits.
    ///
    /// The block hash is not on the wire and comes back as [`Hash::ZERO`].
    pub fn deserialize<R: Read>(r: &mut R) -> SerResult<Self> {
        Self::deserialize_with_limits(r, &CodecLimits::default())
    }

    /// Reads a canonical encoding from `r`, bounding the script by `limits`.
    pub fn deserialize_with_limits<R: Read>(r: &mut R, limits: &CodecLimits) -> SerResult<Self> {
        let outpoint = OutPoint::read_from(r, SerKind::Leaf)?;
        let stxo = CompactLeaf::read_from(r, limits, SerKind::Leaf)?;
        tracing::trace!(%outpoint, height = stxo.height, "deserialized leaf");
        Ok(stxo.into_leaf(Hash::ZERO, outpoint))
    }

    /// Canonical encoding as an owned buffer.
    pub fn to_bytes(&self) -> SerResult<Vec<u8>> {
        let mut out = Vec::with_capacity(self.serialize_size() - BLOCK_HASH_SIZE_DISCREPANCY);
        self.serialize(&mut out)?;
        Ok(out)
    }

    /// Decodes a buffer holding exactly one canonical encoding.
    pub fn from_bytes(bytes: &[u8]) -> SerResult<Self> {
        let mut cursor = ByteReader::new(bytes);
        let record = Self::deserialize(&mut cursor)?;
        cursor.ensure_consumed(SerKind::Leaf)?;
        Ok(record)
    }

    /// SHA-512/256 of the canonical encoding.
    ///
    /// # Panics
    ///
    /// Panics under the same condition as [`LeafRecord::serialize`].
    pub fn leaf_hash(&self) -> SerResult<LeafHash> {
        let mut hasher = LeafHasher::new();
        self.serialize(&mut hasher)?;
        tracing::trace!(bytes = hasher.written(), "hashed leaf");
        Ok(hasher.finalize())
    }
}
