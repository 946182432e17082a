//! Per-chain index of heights with a stored header, used to locate the
//! validator set authoritative for any later height.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{StdResult, Storage};
use cw_storage_plus::Map;

use crate::error::ContractError;

pub const KEY_HEIGHTS: Map<u64, KeyHeights> = Map::new("key_heights");

/// A sorted, deduplicated set of heights. Grows monotonically; entries
/// are never removed.
#[cw_serde]
#[derive(Default)]
pub struct KeyHeights {
    heights: Vec<u64>,
}

impl KeyHeights {
    pub fn insert(&mut self, height: u64) {
        if let Err(pos) = self.heights.binary_search(&height) {
            self.heights.insert(pos, height);
        }
    }

    /// Largest recorded height `k <= height`, or `None` when the height
    /// precedes all known history.
    pub fn find_key_height(&self, height: u64) -> Option<u64> {
        let idx = self.heights.partition_point(|&k| k <= height);
        idx.checked_sub(1).map(|i| self.heights[i])
    }

    pub fn heights(&self) -> &[u64] {
        &self.heights
    }
}

pub fn exists(storage: &dyn Storage, chain_id: u64) -> bool {
    KEY_HEIGHTS.has(storage, chain_id)
}

pub fn get(storage: &dyn Storage, chain_id: u64) -> Result<KeyHeights, ContractError> {
    KEY_HEIGHTS
        .load(storage, chain_id)
        .map_err(|_| ContractError::GenesisNotInitialized { chain_id })
}

pub fn save(storage: &mut dyn Storage, chain_id: u64, key_heights: &KeyHeights) -> StdResult<()> {
    KEY_HEIGHTS.save(storage, chain_id, key_heights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_sorted_and_deduplicates() {
        let mut kh = KeyHeights::default();
        for h in [10000, 10002, 10001, 10002] {
            kh.insert(h);
        }
        assert_eq!(kh.heights(), &[10000, 10001, 10002]);
    }

    #[test]
    fn find_key_height_returns_floor() {
        let mut kh = KeyHeights::default();
        for h in [10000, 10005, 10010] {
            kh.insert(h);
        }
        assert_eq!(kh.find_key_height(10000), Some(10000));
        assert_eq!(kh.find_key_height(10004), Some(10000));
        assert_eq!(kh.find_key_height(10005), Some(10005));
        assert_eq!(kh.find_key_height(99999), Some(10010));
    }

    #[test]
    fn heights_before_history_have_no_key_height() {
        let mut kh = KeyHeights::default();
        kh.insert(10000);
        assert_eq!(kh.find_key_height(9999), None);
    }
}
