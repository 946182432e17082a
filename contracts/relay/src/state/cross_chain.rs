//! At-most-once markers for processed cross-chain transactions.

use cosmwasm_std::Storage;
use cw_storage_plus::Map;

use crate::error::ContractError;

/// `(source_chain_id, source_tx_hash) ->` tombstone.
pub const DONE_TXS: Map<(u64, &[u8]), bool> = Map::new("done_tx");

pub fn is_done(storage: &dyn Storage, chain_id: u64, tx_hash: &[u8]) -> bool {
    DONE_TXS.has(storage, (chain_id, tx_hash))
}

/// Write-once: a second call for the same `(chain, tx)` fails.
pub fn check_and_set_done(
    storage: &mut dyn Storage,
    chain_id: u64,
    tx_hash: &[u8],
) -> Result<(), ContractError> {
    if is_done(storage, chain_id, tx_hash) {
        return Err(ContractError::TxHasCommit {
            chain_id,
            tx_hash: hex::encode(tx_hash),
        });
    }
    DONE_TXS.save(storage, (chain_id, tx_hash), &true)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_dependencies;

    #[test]
    fn second_marking_fails() {
        let mut deps = mock_dependencies();
        let tx_hash = [0x5a; 32];
        check_and_set_done(deps.as_mut().storage, 5, &tx_hash).unwrap();
        let err = check_and_set_done(deps.as_mut().storage, 5, &tx_hash).unwrap_err();
        assert_eq!(
            err,
            ContractError::TxHasCommit {
                chain_id: 5,
                tx_hash: hex::encode(tx_hash),
            }
        );
    }

    #[test]
    fn markers_are_scoped_per_chain() {
        let mut deps = mock_dependencies();
        let tx_hash = [0x5a; 32];
        check_and_set_done(deps.as_mut().storage, 5, &tx_hash).unwrap();
        check_and_set_done(deps.as_mut().storage, 6, &tx_hash).unwrap();
        assert!(is_done(deps.as_ref().storage, 5, &tx_hash));
        assert!(is_done(deps.as_ref().storage, 6, &tx_hash));
    }
}
