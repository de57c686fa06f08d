//! The utreexo leaf record and its two wire formats.
//!
//! * [`full`] – canonical encoding, hashed into the [`LeafHash`](crate::hash::LeafHash).
//! * [`compact`] – the same payload minus the outpoint.
//! * [`header`] – the height/coinbase header code shared by both.

pub mod compact;
pub mod full;
pub mod header;
pub mod outpoint;
pub mod record;

pub use compact::CompactLeaf;
pub use full::BLOCK_HASH_SIZE_DISCREPANCY;
pub use header::HeaderCode;
pub use outpoint::OutPoint;
pub use record::{LeafRecord, MAX_SCRIPT_SIZE};
