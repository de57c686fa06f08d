use core::fmt;

use serde::{Deserialize, Serialize};

use super::header::HeaderCode;
use super::outpoint::OutPoint;
use crate::hash::Hash;
use crate::ser::{SerError, SerKind, SerResult};

/// Largest `pk_script` accepted by either leaf format.
pub const MAX_SCRIPT_SIZE: usize = 10_000;

/// Everything committed to by one accumulator leaf.
///
/// The data serves two roles. `block_hash` commits to the block that created
/// the output. `outpoint` identifies the output being spent, and `height`,
/// `is_coinbase`, `amount` and `pk_script` are what transaction verification
/// needs (scripts, signatures, coinbase maturity).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeafRecord {
    /// Hash of the block that created the output. Not part of the current
    /// wire format; see [`LeafRecord::serialize`].
    pub block_hash: Hash,
    /// The output being spent.
    pub outpoint: OutPoint,
    /// Height of the block that created the output.
    pub height: i32,
    /// Whether the creating transaction was a coinbase.
    pub is_coinbase: bool,
    /// Output value in satoshis.
    pub amount: i64,
    /// Output script.
    #[serde(with = "hex_bytes")]
    pub pk_script: Vec<u8>,
}

impl LeafRecord {
    /// Returns a zeroed record: zero identifiers, index 0, empty script.
    ///
    /// The zeroed record is not encodable until `outpoint` is populated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Header code packing `height` and `is_coinbase`.
    pub fn header_code(&self) -> HeaderCode {
        HeaderCode::pack(self.height, self.is_coinbase)
    }

    /// Reports every condition that would stop this record from encoding,
    /// including the zero transaction id that [`LeafRecord::serialize`]
    /// treats as a fatal contract breach.
    pub fn validate(&self) -> SerResult<()> {
        if self.outpoint.hash.is_zero() {
            return Err(SerError::invalid_value(
                SerKind::Leaf,
                "tx hash",
                "outpoint transaction id is all zeroes",
            ));
        }
        self.check_stxo(SerKind::Leaf)
    }

    /// Field checks shared by both formats.
    pub(crate) fn check_stxo(&self, kind: SerKind) -> SerResult<()> {
        if self.height < 0 {
            return Err(SerError::invalid_value(
                kind,
                "height",
                format!("negative height {}", self.height),
            ));
        }
        if self.amount < 0 {
            return Err(SerError::invalid_value(
                kind,
                "amount",
                format!("negative amount {}", self.amount),
            ));
        }
        if self.pk_script.len() > MAX_SCRIPT_SIZE {
            tracing::debug!(
                %kind,
                len = self.pk_script.len(),
                "pk_script exceeds the maximum script size"
            );
            return Err(SerError::invalid_length(
                kind,
                "pkscript",
                self.pk_script.len() as u64,
                MAX_SCRIPT_SIZE as u64,
            ));
        }
        Ok(())
    }
}

/// Single-line rendering for logs.
///
/// A record that fails [`LeafRecord::validate`] renders its leaf hash as
/// `invalid` instead of aborting.
impl fmt::Display for LeafRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash:{},", self.block_hash)?;
        write!(f, "OutPoint:{},", self.outpoint)?;
        write!(f, "Amount:{},", self.amount)?;
        write!(f, "PkScript:")?;
        for byte in &self.pk_script {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ",BlockHeight:{},", self.height)?;
        write!(f, "IsCoinBase:{},", self.is_coinbase)?;
        match self.validate().and_then(|()| self.leaf_hash()) {
            Ok(hash) => write!(f, "LeafHash:{},", hash)?,
            Err(_) => write!(f, "LeafHash:invalid,")?,
        }
        write!(f, "Size:{}", self.serialize_size())
    }
}

/// Scripts travel as hex strings in JSON fixtures.
pub(crate) mod hex_bytes {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text: String = bytes.iter().map(|byte| format!("{byte:02x}")).collect();
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        if text.len() % 2 != 0 {
            return Err(D::Error::custom(format!(
                "hex payload has odd length: {}",
                text.len()
            )));
        }
        (0..text.len())
            .step_by(2)
            .map(|at| {
                text.get(at..at + 2)
                    .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                    .ok_or_else(|| D::Error::custom(format!("invalid hex at position {at}")))
            })
            .collect()
    }
}
