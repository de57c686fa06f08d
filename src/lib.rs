//! Leaf data for the utreexo accumulator.
//!
//! A utreexo leaf commits to one unspent output. This crate owns the leaf's
//! byte-level contract:
//!
//! * the canonical encoding ([`LeafRecord::serialize`]) that identifies and
//!   verifies the output,
//! * the compact encoding ([`LeafRecord::serialize_compact`]) that drops the
//!   outpoint for transport next to the spending transaction,
//! * the leaf hash ([`LeafRecord::leaf_hash`]), SHA-512/256 of the canonical
//!   encoding.
//!
//! Every byte layout here is part of a commitment: changing any of them
//! changes every leaf hash in the accumulator.

pub mod config;
pub mod hash;
pub mod leaf;
pub mod ser;

pub use config::{CodecLimits, ConfigError};
pub use hash::{Hash, LeafHash, LeafHasher};
pub use leaf::{
    CompactLeaf, HeaderCode, LeafRecord, OutPoint, BLOCK_HASH_SIZE_DISCREPANCY, MAX_SCRIPT_SIZE,
};
pub use ser::{SerError, SerKind, SerResult};
