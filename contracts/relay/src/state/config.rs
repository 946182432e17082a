//! Config is a singleton in the contract's storage.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

pub const CONFIG: Item<Config> = Item::new("config");

#[cw_serde]
pub struct Config {
    /// Operator allowed to adopt genesis headers and register side chains.
    pub owner: Addr,
}
