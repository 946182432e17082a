//! Relayer parameter blocks and the cross-chain message payload, all in
//! the zero-copy binary framing the source chains use.

use crate::wire::{WireError, ZeroCopySink, ZeroCopySource};

/// Parameters of `SyncGenesisHeader`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncGenesisHeaderParam {
    pub chain_id: u64,
    pub genesis_header: Vec<u8>,
}

impl SyncGenesisHeaderParam {
    pub fn serialize(&self) -> Vec<u8> {
        let mut sink = ZeroCopySink::new();
        sink.write_u64(self.chain_id);
        sink.write_var_bytes(&self.genesis_header);
        sink.into_bytes()
    }

    pub fn deserialize(bytes: &[u8]) -> Result<Self, WireError> {
        let mut source = ZeroCopySource::new(bytes);
        let param = SyncGenesisHeaderParam {
            chain_id: source.read_u64()?,
            genesis_header: source.read_var_bytes()?,
        };
        source.expect_done()?;
        Ok(param)
    }
}

/// Parameters of `SyncBlockHeader`: a batch of encoded headers applied in
/// input order. `address` identifies the submitting relayer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncBlockHeaderParam {
    pub chain_id: u64,
    pub address: Vec<u8>,
    pub headers: Vec<Vec<u8>>,
}

impl SyncBlockHeaderParam {
    pub fn serialize(&self) -> Vec<u8> {
        let mut sink = ZeroCopySink::new();
        sink.write_u64(self.chain_id);
        sink.write_var_bytes(&self.address);
        sink.write_var_uint(self.headers.len() as u64);
        for header in &self.headers {
            sink.write_var_bytes(header);
        }
        sink.into_bytes()
    }

    pub fn deserialize(bytes: &[u8]) -> Result<Self, WireError> {
        let mut source = ZeroCopySource::new(bytes);
        let chain_id = source.read_u64()?;
        let address = source.read_var_bytes()?;
        let count = source.read_var_uint()?;
        let mut headers = Vec::new();
        for _ in 0..count {
            headers.push(source.read_var_bytes()?);
        }
        source.expect_done()?;
        Ok(SyncBlockHeaderParam {
            chain_id,
            address,
            headers,
        })
    }
}

/// Parameters of `MakeDepositProposal`. `extra` carries the leaf value the
/// proof commits; `header_or_cross_chain_msg` is unused for Cosmos chains
/// but part of the shared framing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntranceParam {
    pub source_chain_id: u64,
    pub height: u32,
    pub proof: Vec<u8>,
    pub relayer_address: Vec<u8>,
    pub extra: Vec<u8>,
    pub header_or_cross_chain_msg: Vec<u8>,
}

impl EntranceParam {
    pub fn serialize(&self) -> Vec<u8> {
        let mut sink = ZeroCopySink::new();
        sink.write_u64(self.source_chain_id);
        sink.write_u32(self.height);
        sink.write_var_bytes(&self.proof);
        sink.write_var_bytes(&self.relayer_address);
        sink.write_var_bytes(&self.extra);
        sink.write_var_bytes(&self.header_or_cross_chain_msg);
        sink.into_bytes()
    }

    pub fn deserialize(bytes: &[u8]) -> Result<Self, WireError> {
        let mut source = ZeroCopySource::new(bytes);
        let param = EntranceParam {
            source_chain_id: source.read_u64()?,
            height: source.read_u32()?,
            proof: source.read_var_bytes()?,
            relayer_address: source.read_var_bytes()?,
            extra: source.read_var_bytes()?,
            header_or_cross_chain_msg: source.read_var_bytes()?,
        };
        source.expect_done()?;
        Ok(param)
    }
}

/// The message a source chain's cross-chain contract wrote into its store,
/// extracted from a verified leaf value. Returned verbatim to the host as
/// the deposit proposal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CrossChainMsg {
    pub tx_hash: Vec<u8>,
    pub cross_chain_id: Vec<u8>,
    pub from_contract_address: Vec<u8>,
    pub to_chain_id: u64,
    pub to_contract: Vec<u8>,
    pub method: Vec<u8>,
    pub args: Vec<u8>,
}

/// The record handed back for outbound routing; same shape, same framing.
pub type MakeTxParam = CrossChainMsg;

impl CrossChainMsg {
    pub fn serialize(&self) -> Vec<u8> {
        let mut sink = ZeroCopySink::new();
        sink.write_var_bytes(&self.tx_hash);
        sink.write_var_bytes(&self.cross_chain_id);
        sink.write_var_bytes(&self.from_contract_address);
        sink.write_u64(self.to_chain_id);
        sink.write_var_bytes(&self.to_contract);
        sink.write_var_bytes(&self.method);
        sink.write_var_bytes(&self.args);
        sink.into_bytes()
    }

    pub fn deserialize(bytes: &[u8]) -> Result<Self, WireError> {
        let mut source = ZeroCopySource::new(bytes);
        let msg = CrossChainMsg {
            tx_hash: source.read_var_bytes()?,
            cross_chain_id: source.read_var_bytes()?,
            from_contract_address: source.read_var_bytes()?,
            to_chain_id: source.read_u64()?,
            to_contract: source.read_var_bytes()?,
            method: source.read_var_bytes()?,
            args: source.read_var_bytes()?,
        };
        source.expect_done()?;
        Ok(msg)
    }
}
