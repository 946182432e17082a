use cosmwasm_std::StdError;
use thiserror::Error;

use crossgate_lightclient::LightClientError;

use crate::wire::WireError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),
    #[error("Unauthorized")]
    Unauthorized {},
    #[error("Header at height {height} of chain {chain_id} does not exist")]
    HeaderNotExist { chain_id: u64, height: u64 },
    #[error("Malformed proof: {msg}")]
    ProofFormat { msg: String },
    #[error("Proof verification failed: {msg}")]
    VerifyProof { msg: String },
    #[error("Transaction {tx_hash} from chain {chain_id} has already been processed")]
    TxHasCommit { chain_id: u64, tx_hash: String },
    #[error("Genesis header of chain {chain_id} has already been initialized")]
    GenesisInitialized { chain_id: u64 },
    #[error("Genesis header of chain {chain_id} has not been initialized")]
    GenesisNotInitialized { chain_id: u64 },
    #[error("Side chain {chain_id} is not registered")]
    SideChainNotRegistered { chain_id: u64 },
    #[error("Side chain {chain_id} is already registered")]
    SideChainRegistered { chain_id: u64 },
    #[error("{0}")]
    LightClient(#[from] LightClientError),
    #[error("parameter deserialization error: {0}")]
    ParamDecode(#[from] WireError),
    #[error("cross-chain message deserialization error: {0}")]
    CrossChainMsgDecode(WireError),
}

impl ContractError {
    pub fn proof_format(msg: impl Into<String>) -> Self {
        ContractError::ProofFormat { msg: msg.into() }
    }

    pub fn verify_proof(msg: impl Into<String>) -> Self {
        ContractError::VerifyProof { msg: msg.into() }
    }
}
