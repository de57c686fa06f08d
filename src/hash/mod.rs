//! Identifiers and the leaf commitment hash.
//!
//! * [`Hash`] is the 32-byte identifier used for block hashes and transaction
//!   ids, displayed in Bitcoin's byte-reversed convention.
//! * [`LeafHasher`] streams a leaf's canonical encoding through SHA-512/256 and
//!   yields a [`LeafHash`].

pub mod identifier;
pub mod leaf;

pub use identifier::{Hash, HashParseError, HexOutput};
pub use leaf::{LeafHash, LeafHasher};
