//! Height and coinbase flag fused into one varint.
//!
//! ```text
//! bit 0      - the creating transaction is a coinbase
//! bits 1..   - height of the block containing the creating transaction
//! ```

use serde::{Deserialize, Serialize};

/// Packed `(height << 1) | coinbase` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeaderCode(u64);

impl HeaderCode {
    /// Packs a height and coinbase flag.
    ///
    /// The shift is done on a sign-extended 64-bit value, so negative heights
    /// produce a (very large) code instead of wrapping. Encoders reject
    /// negative heights before the code reaches the wire.
    pub const fn pack(height: i32, is_coinbase: bool) -> Self {
        Self((((height as i64) << 1) as u64) | is_coinbase as u64)
    }

    /// Wraps a code read from the wire.
    pub const fn from_raw(code: u64) -> Self {
        Self(code)
    }

    /// Raw varint value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Coinbase flag stored in bit 0.
    pub const fn is_coinbase(self) -> bool {
        self.0 & 1 == 1
    }

    /// Height stored in the remaining bits, if it fits an `i32`.
    pub fn height(self) -> Option<i32> {
        i32::try_from(self.0 >> 1).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(HeaderCode::pack(0, true).raw(), 1);
        assert_eq!(HeaderCode::pack(5, false).raw(), 10);
        assert_eq!(HeaderCode::pack(i32::MAX, true).raw(), 0xffff_ffff);
    }

    #[test]
    fn unpack_recovers_fields() {
        let code = HeaderCode::from_raw(0x0d);
        assert!(code.is_coinbase());
        assert_eq!(code.height(), Some(6));
    }

    #[test]
    fn oversized_height_does_not_fit() {
        let code = HeaderCode::from_raw((i32::MAX as u64 + 1) << 1);
        assert_eq!(code.height(), None);
    }
}
