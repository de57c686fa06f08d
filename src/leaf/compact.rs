//! Compact leaf serialization.
//!
//! Leaves out the outpoint, which the receiver already has from the
//! transaction input being validated. Hashing a compact leaf still needs that
//! outpoint, so decoders hand back a [`CompactLeaf`] that the caller completes
//! with [`CompactLeaf::into_leaf`].
//!
//! ```text
//! Field              Type       Size
//! stxo               -          variable
//!   header code      varint     variable
//!   amount           varint     variable
//!   pkscript length  varint     variable
//!   pkscript         []byte     variable
//! ```

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use super::header::HeaderCode;
use super::outpoint::OutPoint;
use super::record::LeafRecord;
use crate::config::CodecLimits;
use crate::hash::Hash;
use crate::ser::{
    read_var_bytes, read_varint, read_varint_t, var_bytes_size, varint_size, write_var_bytes,
    write_varint, ByteReader, SerError, SerKind, SerResult,
};

/// Fields carried by the compact format.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompactLeaf {
    /// Height of the block that created the output.
    pub height: i32,
    /// Whether the creating transaction was a coinbase.
    pub is_coinbase: bool,
    /// Output value in satoshis.
    pub amount: i64,
    /// Output script.
    #[serde(with = "crate::leaf::record::hex_bytes")]
    pub pk_script: Vec<u8>,
}

impl CompactLeaf {
    /// Completes the leaf with the data the compact format leaves out.
    pub fn into_leaf(self, block_hash: Hash, outpoint: OutPoint) -> LeafRecord {
        LeafRecord {
            block_hash,
            outpoint,
            height: self.height,
            is_coinbase: self.is_coinbase,
            amount: self.amount,
            pk_script: self.pk_script,
        }
    }

    pub(crate) fn read_from<R: Read>(
        r: &mut R,
        limits: &CodecLimits,
        kind: SerKind,
    ) -> SerResult<Self> {
        let code = HeaderCode::from_raw(read_varint(r, kind, "header code")?);
        let height = code.height().ok_or_else(|| {
            SerError::invalid_value(
                kind,
                "header code",
                format!("height {} does not fit in 32 bits", code.raw() >> 1),
            )
        })?;
        let amount = read_varint_t::<_, i64>(r, kind, "amount")?;
        let pk_script = read_var_bytes(r, limits.script_size_bound(), kind, "pkscript")?;

        Ok(Self {
            height,
            is_coinbase: code.is_coinbase(),
            amount,
            pk_script,
        })
    }
}

impl LeafRecord {
    pub(crate) fn write_stxo<W: Write>(&self, w: &mut W, kind: SerKind) -> SerResult<()> {
        write_varint(w, self.header_code().raw(), kind, "header code")?;
        write_varint(w, self.amount as u64, kind, "amount")?;
        write_var_bytes(w, &self.pk_script, kind, "pkscript")
    }

    /// Exact length of the compact encoding.
    pub fn serialize_size_compact(&self) -> usize {
        varint_size(self.header_code().raw())
            + varint_size(self.amount as u64)
            + var_bytes_size(self.pk_script.len())
    }

    /// Writes the compact encoding to `w`.
    pub fn serialize_compact<W: Write>(&self, w: &mut W) -> SerResult<()> {
        self.check_stxo(SerKind::CompactLeaf)?;
        self.write_stxo(w, SerKind::CompactLeaf)?;
        tracing::trace!(
            header_code = self.header_code().raw(),
            script_len = self.pk_script.len(),
            "serialized compact leaf"
        );
        Ok(())
    }

    /// Reads a compact encoding from `r` with the consensus limits.
    pub fn deserialize_compact<R: Read>(r: &mut R) -> SerResult<CompactLeaf> {
        Self::deserialize_compact_with_limits(r, &CodecLimits::default())
    }

    /// Reads a compact encoding from `r`, bounding the script by `limits`.
    pub fn deserialize_compact_with_limits<R: Read>(
        r: &mut R,
        limits: &CodecLimits,
    ) -> SerResult<CompactLeaf> {
        CompactLeaf::read_from(r, limits, SerKind::CompactLeaf)
    }

    /// Compact encoding as an owned buffer.
    pub fn to_compact_bytes(&self) -> SerResult<Vec<u8>> {
        let mut out = Vec::with_capacity(self.serialize_size_compact());
        self.serialize_compact(&mut out)?;
        Ok(out)
    }

    /// Decodes a buffer holding exactly one compact encoding.
    pub fn from_compact_bytes(bytes: &[u8]) -> SerResult<CompactLeaf> {
        let mut cursor = ByteReader::new(bytes);
        let leaf = Self::deserialize_compact(&mut cursor)?;
        cursor.ensure_consumed(SerKind::CompactLeaf)?;
        Ok(leaf)
    }
}
