//! Tendermint's simple Merkle tree over byte slices.
//!
//! RFC 6962 domain separation (`0x00` leaf prefix, `0x01` inner prefix,
//! SHA-256) with the CometBFT split rule: an n-leaf tree splits at the
//! largest power of two strictly below n. Used for the block-header
//! field hash and the validator-set hash.

pub mod hash;
pub mod tree;

pub use hash::{empty_hash, inner_hash, leaf_hash};
pub use tree::hash_from_slices;

/// SHA-256 output size, the only hash width in the tree.
pub const HASH_SIZE: usize = 32;
