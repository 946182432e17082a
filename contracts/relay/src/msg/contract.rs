use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Binary;

#[cfg(not(target_arch = "wasm32"))]
use crate::state::{config::Config, side_chain::SideChain};

#[cw_serde]
pub struct InstantiateMsg {
    /// Operator for the privileged calls; defaults to the instantiator.
    pub owner: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Registers a side chain record. Owner only; a live chain id cannot
    /// be re-registered.
    RegisterSideChain {
        name: String,
        chain_id: u64,
        blocks_to_wait: u64,
        router: u64,
        /// Address of the cross-chain manager contract on the side chain
        ccmc_address: Binary,
    },
    /// Adopts the genesis header of a side chain. Owner only, once per
    /// chain. `payload` is a framed `SyncGenesisHeaderParam`.
    SyncGenesisHeader { payload: Binary },
    /// Appends headers to a synced chain, verifying each against the
    /// stored history. Permissionless; already-stored heights are
    /// skipped. `payload` is a framed `SyncBlockHeaderParam`.
    SyncBlockHeader { payload: Binary },
    /// Accepted for router compatibility; Cosmos chains carry no separate
    /// cross-chain message stream, so this does nothing.
    SyncCrossChainMsg { payload: Binary },
    /// Verifies a store proof against a synced header and emits the
    /// deposit proposal it commits. `payload` is a framed
    /// `EntranceParam`.
    MakeDepositProposal { payload: Binary },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Config returns the current configuration of the relay contract
    #[returns(Config)]
    Config {},
    /// SideChain returns the registered record of a side chain
    #[returns(SideChain)]
    SideChain { chain_id: u64 },
    /// Header returns a stored header of a side chain, by height
    #[returns(HeaderResponse)]
    Header { chain_id: u64, height: u64 },
    /// CurrentHeight returns the highest accepted height of a side chain
    #[returns(CurrentHeightResponse)]
    CurrentHeight { chain_id: u64 },
    /// KeyHeights returns the heights with a stored header, ascending
    #[returns(KeyHeightsResponse)]
    KeyHeights { chain_id: u64 },
    /// TxDone reports whether a source transaction was already processed
    #[returns(TxDoneResponse)]
    TxDone { chain_id: u64, tx_hash: Binary },
}

#[cw_serde]
pub struct HeaderResponse {
    pub chain_id: u64,
    pub height: u64,
    /// Hex-encoded canonical header hash
    pub hash: String,
    /// The stored header in its wire encoding
    pub header: Binary,
}

#[cw_serde]
pub struct CurrentHeightResponse {
    pub height: Option<u64>,
}

#[cw_serde]
pub struct KeyHeightsResponse {
    pub heights: Vec<u64>,
}

#[cw_serde]
pub struct TxDoneResponse {
    pub done: bool,
}
