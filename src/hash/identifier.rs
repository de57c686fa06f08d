use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ser::DIGEST_SIZE;

/// Error surfaced when parsing a [`Hash`] from its hexadecimal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashParseError {
    /// The string did not hold exactly 64 hex digits.
    InvalidLength {
        /// Number of characters found.
        found: usize,
    },
    /// A character outside `[0-9a-fA-F]` was found.
    InvalidCharacter {
        /// Offending character.
        character: char,
        /// Character position within the input.
        index: usize,
    },
}

impl fmt::Display for HashParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashParseError::InvalidLength { found } => {
                write!(f, "expected {} hex characters, found {found}", DIGEST_SIZE * 2)
            }
            HashParseError::InvalidCharacter { character, index } => {
                write!(f, "invalid hex character {character:?} at position {index}")
            }
        }
    }
}

impl std::error::Error for HashParseError {}

/// 32-byte identifier (block hash, transaction id).
///
/// Bytes are kept in internal (wire) order. [`fmt::Display`] and [`FromStr`]
/// use the Bitcoin display convention, which is the byte-reversed hex string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Hash {
    bytes: [u8; DIGEST_SIZE],
}

impl Hash {
    /// The all-zero identifier.
    pub const ZERO: Hash = Hash {
        bytes: [0u8; DIGEST_SIZE],
    };

    /// Constructs a hash value from raw bytes in internal order.
    pub const fn from_bytes(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the raw bytes in internal order.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.bytes
    }

    /// Consumes the hash and returns the underlying byte array.
    pub const fn into_bytes(self) -> [u8; DIGEST_SIZE] {
        self.bytes
    }

    /// Whether every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.bytes.iter().all(|byte| *byte == 0)
    }

    /// Returns a helper that formats the raw bytes as lowercase hexadecimal,
    /// in internal order.
    pub fn to_hex(&self) -> HexOutput {
        HexOutput(self.bytes)
    }
}

impl From<[u8; DIGEST_SIZE]> for Hash {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Hash> for [u8; DIGEST_SIZE] {
    fn from(hash: Hash) -> Self {
        hash.into_bytes()
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.bytes.iter().rev() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({self})")
    }
}

impl FromStr for Hash {
    type Err = HashParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != DIGEST_SIZE * 2 {
            return Err(HashParseError::InvalidLength { found: s.len() });
        }
        let mut bytes = [0u8; DIGEST_SIZE];
        for (index, character) in s.chars().enumerate() {
            let nibble = character
                .to_digit(16)
                .ok_or(HashParseError::InvalidCharacter { character, index })?
                as u8;
            // Display order is reversed: the first pair is the last byte.
            let slot = &mut bytes[DIGEST_SIZE - 1 - index / 2];
            if index % 2 == 0 {
                *slot = nibble << 4;
            } else {
                *slot |= nibble;
            }
        }
        Ok(Self { bytes })
    }
}

impl Serialize for Hash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Hexadecimal rendering of 32 raw bytes in natural order.
#[derive(Clone, Copy)]
pub struct HexOutput(pub(crate) [u8; DIGEST_SIZE]);

impl fmt::Display for HexOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HexOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_byte_reversed() {
        let mut bytes = [0u8; DIGEST_SIZE];
        bytes[0] = 0x01;
        bytes[31] = 0xab;
        let hash = Hash::from_bytes(bytes);
        let shown = hash.to_string();
        assert!(shown.starts_with("ab00"));
        assert!(shown.ends_with("0001"));
        assert!(hash.to_hex().to_string().starts_with("0100"));
        assert_eq!(shown.parse::<Hash>().unwrap(), hash);
    }

    #[test]
    fn zero_constant() {
        assert!(Hash::ZERO.is_zero());
        assert!(Hash::default().is_zero());
        assert!(!Hash::from_bytes([1u8; DIGEST_SIZE]).is_zero());
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            "abc".parse::<Hash>(),
            Err(HashParseError::InvalidLength { found: 3 })
        );
        let bad = format!("{}zz", "0".repeat(62));
        assert_eq!(
            bad.parse::<Hash>(),
            Err(HashParseError::InvalidCharacter {
                character: 'z',
                index: 62
            })
        );
    }
}
