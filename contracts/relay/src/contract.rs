use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Empty, Env, Event, MessageInfo, Response,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::contract::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::msg::params::{
    CrossChainMsg, EntranceParam, MakeTxParam, SyncBlockHeaderParam, SyncGenesisHeaderParam,
};
use crate::queries;
use crate::state::config::{Config, CONFIG};
use crate::state::header_chain::{self, AcceptedHeader};
use crate::state::side_chain::{self, SideChain};
use crate::state::cross_chain;
use crate::utils::proof::{cross_chain_msg_key, decode_proof_ops, verify_key_value, CCM_SUBSTORE};

pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let owner = match msg.owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender,
    };
    CONFIG.save(deps.storage, &Config { owner })?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new().add_attribute("action", "instantiate"))
}

pub fn migrate(deps: DepsMut, _env: Env, _msg: Empty) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("action", "migrate"))
}

pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RegisterSideChain {
            name,
            chain_id,
            blocks_to_wait,
            router,
            ccmc_address,
        } => {
            assert_owner(deps.as_ref(), &info)?;
            side_chain::register(
                deps.storage,
                &SideChain {
                    name,
                    chain_id,
                    blocks_to_wait,
                    router,
                    ccmc_address,
                },
            )?;
            Ok(Response::new()
                .add_attribute("action", "register_side_chain")
                .add_attribute("chain_id", chain_id.to_string()))
        }
        ExecuteMsg::SyncGenesisHeader { payload } => {
            assert_owner(deps.as_ref(), &info)?;
            let param = SyncGenesisHeaderParam::deserialize(&payload)?;
            let accepted = header_chain::handle_genesis_header(
                deps.storage,
                param.chain_id,
                &param.genesis_header,
            )?;
            Ok(Response::new()
                .add_attribute("action", "sync_genesis_header")
                .add_event(sync_header_event(param.chain_id, &accepted)))
        }
        ExecuteMsg::SyncBlockHeader { payload } => {
            let param = SyncBlockHeaderParam::deserialize(&payload)?;
            let accepted = header_chain::handle_block_headers(
                deps.api,
                deps.storage,
                param.chain_id,
                &param.headers,
            )?;
            let mut resp = Response::new().add_attribute("action", "sync_block_header");
            for header in &accepted {
                resp = resp.add_event(sync_header_event(param.chain_id, header));
            }
            Ok(resp)
        }
        // Cosmos chains carry no separate cross-chain message stream
        ExecuteMsg::SyncCrossChainMsg { payload: _ } => {
            Ok(Response::new().add_attribute("action", "sync_cross_chain_msg"))
        }
        ExecuteMsg::MakeDepositProposal { payload } => make_deposit_proposal(deps, &payload),
    }
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Config {} => Ok(to_json_binary(&queries::config(deps)?)?),
        QueryMsg::SideChain { chain_id } => {
            Ok(to_json_binary(&queries::side_chain(deps, chain_id)?)?)
        }
        QueryMsg::Header { chain_id, height } => {
            Ok(to_json_binary(&queries::header(deps, chain_id, height)?)?)
        }
        QueryMsg::CurrentHeight { chain_id } => {
            Ok(to_json_binary(&queries::current_height(deps, chain_id)?)?)
        }
        QueryMsg::KeyHeights { chain_id } => {
            Ok(to_json_binary(&queries::key_heights(deps, chain_id)?)?)
        }
        QueryMsg::TxDone { chain_id, tx_hash } => {
            Ok(to_json_binary(&queries::tx_done(deps, chain_id, &tx_hash))?)
        }
    }
}

fn assert_owner(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    if info.sender != cfg.owner {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

fn sync_header_event(chain_id: u64, header: &AcceptedHeader) -> Event {
    Event::new("sync_header")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("height", header.height.to_string())
        .add_attribute("block_hash", hex::encode(header.hash))
}

/// The deposit-proposal pipeline: side-chain config, stored header, store
/// proof, message extraction, replay marker, outbound record.
fn make_deposit_proposal(deps: DepsMut, payload: &[u8]) -> Result<Response, ContractError> {
    let param = EntranceParam::deserialize(payload)?;

    let side_chain = side_chain::get(deps.storage, param.source_chain_id)?;
    let header = header_chain::get_header(
        deps.storage,
        param.source_chain_id,
        u64::from(param.height),
    )?;

    let ops = decode_proof_ops(&param.proof)?;
    let leaf_key = cross_chain_msg_key(&side_chain.ccmc_address);
    verify_key_value(
        &ops,
        &header.header.app_hash,
        &[leaf_key.as_slice(), CCM_SUBSTORE],
        &param.extra,
    )?;

    let msg = CrossChainMsg::deserialize(&param.extra)
        .map_err(ContractError::CrossChainMsgDecode)?;
    cross_chain::check_and_set_done(deps.storage, param.source_chain_id, &msg.tx_hash)?;

    let make_tx: MakeTxParam = msg;
    Ok(Response::new()
        .add_attribute("action", "make_deposit_proposal")
        .add_event(
            Event::new("make_deposit_proposal")
                .add_attribute("source_chain_id", param.source_chain_id.to_string())
                .add_attribute("height", param.height.to_string())
                .add_attribute("tx_hash", hex::encode(&make_tx.tx_hash))
                .add_attribute("to_chain_id", make_tx.to_chain_id.to_string())
                .add_attribute("method", String::from_utf8_lossy(&make_tx.method)),
        )
        .set_data(Binary::from(make_tx.serialize())))
}
