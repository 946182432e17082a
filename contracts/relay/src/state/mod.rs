//! Contract storage: configuration, the side-chain registry, the header
//! store with its key-heights index, and the replay markers.

pub mod config;
pub mod cross_chain;
pub mod header_chain;
pub mod key_heights;
pub mod side_chain;
