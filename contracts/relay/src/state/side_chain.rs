//! Registry of side chains. Governance writes one record per chain id;
//! the verifier core only reads it.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, StdResult, Storage};
use cw_storage_plus::Map;

use crate::error::ContractError;

pub const SIDE_CHAINS: Map<u64, SideChain> = Map::new("side_chain");

#[cw_serde]
pub struct SideChain {
    pub name: String,
    pub chain_id: u64,
    pub blocks_to_wait: u64,
    pub router: u64,
    /// Address of the cross-chain manager contract on the side chain.
    pub ccmc_address: Binary,
}

pub fn get(storage: &dyn Storage, chain_id: u64) -> Result<SideChain, ContractError> {
    SIDE_CHAINS
        .load(storage, chain_id)
        .map_err(|_| ContractError::SideChainNotRegistered { chain_id })
}

pub fn register(storage: &mut dyn Storage, side_chain: &SideChain) -> Result<(), ContractError> {
    if SIDE_CHAINS.has(storage, side_chain.chain_id) {
        return Err(ContractError::SideChainRegistered {
            chain_id: side_chain.chain_id,
        });
    }
    save(storage, side_chain)?;
    Ok(())
}

pub fn save(storage: &mut dyn Storage, side_chain: &SideChain) -> StdResult<()> {
    SIDE_CHAINS.save(storage, side_chain.chain_id, side_chain)
}
