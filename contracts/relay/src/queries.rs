use cosmwasm_std::{Binary, Deps, StdResult};

use crate::error::ContractError;
use crate::msg::contract::{
    CurrentHeightResponse, HeaderResponse, KeyHeightsResponse, TxDoneResponse,
};
use crate::state::config::{Config, CONFIG};
use crate::state::cross_chain;
use crate::state::header_chain;
use crate::state::key_heights;
use crate::state::side_chain::{self, SideChain};

pub fn config(deps: Deps) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

pub fn side_chain(deps: Deps, chain_id: u64) -> Result<SideChain, ContractError> {
    side_chain::get(deps.storage, chain_id)
}

pub fn header(deps: Deps, chain_id: u64, height: u64) -> Result<HeaderResponse, ContractError> {
    let header = header_chain::get_header(deps.storage, chain_id, height)?;
    Ok(HeaderResponse {
        chain_id,
        height,
        hash: hex::encode(header.header.hash()),
        header: Binary::from(header.encode()),
    })
}

pub fn current_height(deps: Deps, chain_id: u64) -> Result<CurrentHeightResponse, ContractError> {
    Ok(CurrentHeightResponse {
        height: header_chain::get_current_height(deps.storage, chain_id)?,
    })
}

pub fn key_heights(deps: Deps, chain_id: u64) -> Result<KeyHeightsResponse, ContractError> {
    let heights = key_heights::get(deps.storage, chain_id)?;
    Ok(KeyHeightsResponse {
        heights: heights.heights().to_vec(),
    })
}

pub fn tx_done(deps: Deps, chain_id: u64, tx_hash: &[u8]) -> TxDoneResponse {
    TxDoneResponse {
        done: cross_chain::is_done(deps.storage, chain_id, tx_hash),
    }
}
