//! The header store: accepted headers per source chain, addressed by
//! height, plus the current-height bookkeeping and the sync handlers.

use cosmwasm_std::{Api, StdResult, Storage};
use cw_storage_plus::Map;

use crossgate_lightclient::{verify_commit, CosmosHeader, ValidatorSet};

use crate::error::ContractError;
use crate::state::key_heights::{self, KeyHeights};

/// `(chain_id, height) ->` encoded `CosmosHeader`. Headers are written
/// once and never mutated.
pub const HEADERS: Map<(u64, u64), Vec<u8>> = Map::new("header");
/// Highest accepted height per chain.
pub const CURRENT_HEIGHT: Map<u64, u64> = Map::new("current_height");

/// A header accepted by a sync call, for event emission.
#[derive(Debug)]
pub struct AcceptedHeader {
    pub height: u64,
    pub hash: [u8; 32],
}

pub fn has_header(storage: &dyn Storage, chain_id: u64, height: u64) -> bool {
    HEADERS.has(storage, (chain_id, height))
}

pub fn get_header(
    storage: &dyn Storage,
    chain_id: u64,
    height: u64,
) -> Result<CosmosHeader, ContractError> {
    let header_bytes = HEADERS
        .load(storage, (chain_id, height))
        .map_err(|_| ContractError::HeaderNotExist { chain_id, height })?;
    Ok(CosmosHeader::decode(&header_bytes)?)
}

pub fn get_current_height(storage: &dyn Storage, chain_id: u64) -> StdResult<Option<u64>> {
    CURRENT_HEIGHT.may_load(storage, chain_id)
}

fn insert_header(
    storage: &mut dyn Storage,
    chain_id: u64,
    height: u64,
    header: &CosmosHeader,
) -> StdResult<()> {
    HEADERS.save(storage, (chain_id, height), &header.encode())?;
    let current = CURRENT_HEIGHT.may_load(storage, chain_id)?.unwrap_or(0);
    if height > current {
        CURRENT_HEIGHT.save(storage, chain_id, &height)?;
    }
    Ok(())
}

fn checked_height(header: &CosmosHeader) -> Result<u64, ContractError> {
    u64::try_from(header.header.height)
        .ok()
        .filter(|&h| h >= 1)
        .ok_or_else(|| {
            ContractError::Std(cosmwasm_std::StdError::generic_err(
                "header height must be positive",
            ))
        })
}

/// Adopts the genesis header of a chain. No commit verification happens
/// here; trust in the genesis header is the operator's statement.
pub fn handle_genesis_header(
    storage: &mut dyn Storage,
    chain_id: u64,
    header_bytes: &[u8],
) -> Result<AcceptedHeader, ContractError> {
    if key_heights::exists(storage, chain_id) {
        return Err(ContractError::GenesisInitialized { chain_id });
    }
    let header = CosmosHeader::decode(header_bytes)?;
    let height = checked_height(&header)?;

    insert_header(storage, chain_id, height, &header)?;
    let mut heights = KeyHeights::default();
    heights.insert(height);
    key_heights::save(storage, chain_id, &heights)?;

    Ok(AcceptedHeader {
        height,
        hash: header.header.hash(),
    })
}

/// Applies a batch of headers in input order. A height that is already
/// stored is logged and skipped; any other failure aborts the whole batch.
pub fn handle_block_headers(
    api: &dyn Api,
    storage: &mut dyn Storage,
    chain_id: u64,
    headers: &[Vec<u8>],
) -> Result<Vec<AcceptedHeader>, ContractError> {
    let mut accepted = Vec::new();
    for header_bytes in headers {
        let header = CosmosHeader::decode(header_bytes)?;
        let height = checked_height(&header)?;

        if has_header(storage, chain_id, height) {
            api.debug(&format!(
                "header {height} of chain {chain_id} has already been synced, skipping"
            ));
            continue;
        }

        let key_height = key_heights::get(storage, chain_id)?
            .find_key_height(height)
            .ok_or(ContractError::HeaderNotExist { chain_id, height })?;
        let prev = get_header(storage, chain_id, key_height)?;

        let valset = ValidatorSet::new(header.valsets.clone());
        verify_commit(
            Some(&prev.header.next_validators_hash),
            &header.header,
            &header.commit,
            &valset,
            &prev.header.chain_id,
        )?;

        insert_header(storage, chain_id, height, &header)?;
        let mut heights = key_heights::get(storage, chain_id)?;
        heights.insert(height);
        key_heights::save(storage, chain_id, &heights)?;

        accepted.push(AcceptedHeader {
            height,
            hash: header.header.hash(),
        });
    }
    Ok(accepted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_dependencies;
    use crossgate_test_utils::{gaia_header_10000, gaia_header_10001};

    const CHAIN_ID: u64 = 5;

    #[test]
    fn genesis_then_incremental_sync() {
        let mut deps = mock_dependencies();
        let api = deps.api;

        let accepted =
            handle_genesis_header(deps.as_mut().storage, CHAIN_ID, &gaia_header_10000()).unwrap();
        assert_eq!(accepted.height, 10000);
        assert_eq!(
            key_heights::get(deps.as_ref().storage, CHAIN_ID)
                .unwrap()
                .heights(),
            &[10000]
        );

        let stored = get_header(deps.as_ref().storage, CHAIN_ID, 10000).unwrap();
        assert_eq!(stored.header.height, 10000);
        assert_eq!(
            ValidatorSet::new(stored.valsets.clone()).hash().to_vec(),
            stored.header.validators_hash
        );

        let accepted = handle_block_headers(
            &api,
            deps.as_mut().storage,
            CHAIN_ID,
            &[gaia_header_10001()],
        )
        .unwrap();
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].height, 10001);

        let synced = get_header(deps.as_ref().storage, CHAIN_ID, 10001).unwrap();
        assert_eq!(
            ValidatorSet::new(synced.valsets.clone()).hash().to_vec(),
            stored.header.next_validators_hash
        );
        assert_eq!(
            get_current_height(deps.as_ref().storage, CHAIN_ID).unwrap(),
            Some(10001)
        );
        assert_eq!(
            key_heights::get(deps.as_ref().storage, CHAIN_ID)
                .unwrap()
                .heights(),
            &[10000, 10001]
        );
    }

    #[test]
    fn resyncing_a_stored_height_is_a_no_op() {
        let mut deps = mock_dependencies();
        let api = deps.api;
        handle_genesis_header(deps.as_mut().storage, CHAIN_ID, &gaia_header_10000()).unwrap();
        handle_block_headers(
            &api,
            deps.as_mut().storage,
            CHAIN_ID,
            &[gaia_header_10001()],
        )
        .unwrap();

        let accepted = handle_block_headers(
            &api,
            deps.as_mut().storage,
            CHAIN_ID,
            &[gaia_header_10001()],
        )
        .unwrap();
        assert!(accepted.is_empty());
    }

    #[test]
    fn second_genesis_rejected() {
        let mut deps = mock_dependencies();
        handle_genesis_header(deps.as_mut().storage, CHAIN_ID, &gaia_header_10000()).unwrap();
        let err = handle_genesis_header(deps.as_mut().storage, CHAIN_ID, &gaia_header_10001())
            .unwrap_err();
        assert_eq!(err, ContractError::GenesisInitialized { chain_id: CHAIN_ID });
    }

    #[test]
    fn sync_without_genesis_rejected() {
        let mut deps = mock_dependencies();
        let api = deps.api;
        let err = handle_block_headers(
            &api,
            deps.as_mut().storage,
            CHAIN_ID,
            &[gaia_header_10001()],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::GenesisNotInitialized { chain_id: CHAIN_ID }
        );
    }

    #[test]
    fn tampered_header_batch_aborts() {
        let mut deps = mock_dependencies();
        let api = deps.api;
        handle_genesis_header(deps.as_mut().storage, CHAIN_ID, &gaia_header_10000()).unwrap();

        let mut bytes = gaia_header_10001();
        // flip a byte inside the first commit signature
        let pos = bytes.len() / 2;
        bytes[pos] ^= 0x01;
        handle_block_headers(&api, deps.as_mut().storage, CHAIN_ID, &[bytes]).unwrap_err();
        assert!(!has_header(deps.as_ref().storage, CHAIN_ID, 10001));
    }

    #[test]
    fn missing_header_lookup_fails() {
        let deps = mock_dependencies();
        let err = get_header(deps.as_ref().storage, CHAIN_ID, 10002).unwrap_err();
        assert_eq!(
            err,
            ContractError::HeaderNotExist {
                chain_id: CHAIN_ID,
                height: 10002
            }
        );
    }
}
