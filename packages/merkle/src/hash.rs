use sha2::{Digest, Sha256};

use crate::HASH_SIZE;

const LEAF_PREFIX: u8 = 0x00;
const INNER_PREFIX: u8 = 0x01;

/// Hash of the empty tree: SHA-256 of the empty string.
pub fn empty_hash() -> [u8; HASH_SIZE] {
    Sha256::digest([]).into()
}

/// `SHA-256(0x00 ‖ leaf)`
pub fn leaf_hash(leaf: &[u8]) -> [u8; HASH_SIZE] {
    let mut hasher = Sha256::new();
    hasher.update([LEAF_PREFIX]);
    hasher.update(leaf);
    hasher.finalize().into()
}

/// `SHA-256(0x01 ‖ left ‖ right)`
pub fn inner_hash(left: &[u8], right: &[u8]) -> [u8; HASH_SIZE] {
    let mut hasher = Sha256::new();
    hasher.update([INNER_PREFIX]);
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}
