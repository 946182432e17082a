//! Header-side consensus types and their amino codec.
//!
//! Wire layout follows Tendermint v0.32: struct fields numbered in
//! declaration order, zero values omitted. Decoding is strict (unknown
//! fields are errors) and re-encoding a decoded value reproduces the
//! original bytes, which lets stored headers round-trip untouched.

use crossgate_amino::{encode, Reader, Writer, WIRE_BYTES, WIRE_VARINT};
use crossgate_merkle::hash_from_slices;

use crate::error::LightClientError;
use crate::validator::Validator;
use crate::vote::Commit;

/// Seconds/nanos timestamp, amino-encoded like a protobuf `Timestamp`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Time {
    pub seconds: i64,
    pub nanos: i32,
}

impl Time {
    pub fn is_zero(&self) -> bool {
        self.seconds == 0 && self.nanos == 0
    }

    pub(crate) fn encode(&self) -> Vec<u8> {
        let mut w = Writer::new();
        w.varint64_field(1, self.seconds);
        w.uvarint_field(2, self.nanos as u64);
        w.into_bytes()
    }

    pub(crate) fn decode(bytes: &[u8]) -> Result<Self, LightClientError> {
        let mut r = Reader::new(bytes);
        let mut time = Time::default();
        while !r.done() {
            let (field, wire) = r.read_tag()?;
            Reader::check_wire(field, wire, WIRE_VARINT)?;
            match field {
                1 => time.seconds = r.read_varint64()?,
                2 => time.nanos = r.read_varint64()? as i32,
                _ => return Err(unknown_field(field, wire)),
            }
        }
        Ok(time)
    }
}

/// Consensus protocol version carried in the header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Version {
    pub block: u64,
    pub app: u64,
}

impl Version {
    fn encode(&self) -> Vec<u8> {
        let mut w = Writer::new();
        w.uvarint_field(1, self.block);
        w.uvarint_field(2, self.app);
        w.into_bytes()
    }

    fn decode(bytes: &[u8]) -> Result<Self, LightClientError> {
        let mut r = Reader::new(bytes);
        let mut version = Version::default();
        while !r.done() {
            let (field, wire) = r.read_tag()?;
            Reader::check_wire(field, wire, WIRE_VARINT)?;
            match field {
                1 => version.block = r.read_uvarint()?,
                2 => version.app = r.read_uvarint()?,
                _ => return Err(unknown_field(field, wire)),
            }
        }
        Ok(version)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartSetHeader {
    pub total: u32,
    pub hash: Vec<u8>,
}

impl PartSetHeader {
    pub fn is_zero(&self) -> bool {
        self.total == 0 && self.hash.is_empty()
    }

    /// Wire order: total, then hash.
    pub(crate) fn encode(&self) -> Vec<u8> {
        let mut w = Writer::new();
        w.uvarint_field(1, u64::from(self.total));
        w.bytes_field(2, &self.hash);
        w.into_bytes()
    }

    /// Canonical order reverses the fields: hash, then total.
    pub(crate) fn encode_canonical(&self) -> Vec<u8> {
        let mut w = Writer::new();
        w.bytes_field(1, &self.hash);
        w.uvarint_field(2, u64::from(self.total));
        w.into_bytes()
    }

    pub(crate) fn decode(bytes: &[u8]) -> Result<Self, LightClientError> {
        let mut r = Reader::new(bytes);
        let mut parts = PartSetHeader::default();
        while !r.done() {
            let (field, wire) = r.read_tag()?;
            match field {
                1 => {
                    Reader::check_wire(field, wire, WIRE_VARINT)?;
                    parts.total = r.read_uvarint()? as u32;
                }
                2 => {
                    Reader::check_wire(field, wire, WIRE_BYTES)?;
                    parts.hash = r.read_bytes()?.to_vec();
                }
                _ => return Err(unknown_field(field, wire)),
            }
        }
        Ok(parts)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockId {
    pub hash: Vec<u8>,
    pub parts: PartSetHeader,
}

impl BlockId {
    pub fn is_zero(&self) -> bool {
        self.hash.is_empty() && self.parts.is_zero()
    }

    pub(crate) fn encode(&self) -> Vec<u8> {
        let mut w = Writer::new();
        w.bytes_field(1, &self.hash);
        w.struct_field(2, &self.parts.encode());
        w.into_bytes()
    }

    pub(crate) fn encode_canonical(&self) -> Vec<u8> {
        let mut w = Writer::new();
        w.bytes_field(1, &self.hash);
        w.struct_field(2, &self.parts.encode_canonical());
        w.into_bytes()
    }

    pub(crate) fn decode(bytes: &[u8]) -> Result<Self, LightClientError> {
        let mut r = Reader::new(bytes);
        let mut block_id = BlockId::default();
        while !r.done() {
            let (field, wire) = r.read_tag()?;
            Reader::check_wire(field, wire, WIRE_BYTES)?;
            match field {
                1 => block_id.hash = r.read_bytes()?.to_vec(),
                2 => block_id.parts = PartSetHeader::decode(r.read_bytes()?)?,
                _ => return Err(unknown_field(field, wire)),
            }
        }
        Ok(block_id)
    }
}

/// Tendermint block header, v0.32 field set (including the tx counters
/// dropped in later releases).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Header {
    pub version: Version,
    pub chain_id: String,
    pub height: i64,
    pub time: Time,
    pub num_txs: i64,
    pub total_txs: i64,
    pub last_block_id: BlockId,
    pub last_commit_hash: Vec<u8>,
    pub data_hash: Vec<u8>,
    pub validators_hash: Vec<u8>,
    pub next_validators_hash: Vec<u8>,
    pub consensus_hash: Vec<u8>,
    pub app_hash: Vec<u8>,
    pub last_results_hash: Vec<u8>,
    pub evidence_hash: Vec<u8>,
    pub proposer_address: Vec<u8>,
}

impl Header {
    /// Canonical header hash: the simple Merkle root over the bare
    /// encodings of the 16 fields in declaration order. Empty strings,
    /// byte slices, and zero-valued structs contribute empty leaves;
    /// integers always encode, so a zero counter hashes as `0x00`.
    pub fn hash(&self) -> [u8; 32] {
        let leaves = vec![
            self.version.encode(),
            bare_string(&self.chain_id),
            bare_varint(self.height),
            self.time.encode(),
            bare_varint(self.num_txs),
            bare_varint(self.total_txs),
            self.last_block_id.encode(),
            bare_bytes_or_empty(&self.last_commit_hash),
            bare_bytes_or_empty(&self.data_hash),
            bare_bytes_or_empty(&self.validators_hash),
            bare_bytes_or_empty(&self.next_validators_hash),
            bare_bytes_or_empty(&self.consensus_hash),
            bare_bytes_or_empty(&self.app_hash),
            bare_bytes_or_empty(&self.last_results_hash),
            bare_bytes_or_empty(&self.evidence_hash),
            bare_bytes_or_empty(&self.proposer_address),
        ];
        hash_from_slices(&leaves)
    }

    pub(crate) fn encode(&self) -> Vec<u8> {
        let mut w = Writer::new();
        w.struct_field(1, &self.version.encode());
        w.string_field(2, &self.chain_id);
        w.varint64_field(3, self.height);
        w.struct_field(4, &self.time.encode());
        w.varint64_field(5, self.num_txs);
        w.varint64_field(6, self.total_txs);
        w.struct_field(7, &self.last_block_id.encode());
        w.bytes_field(8, &self.last_commit_hash);
        w.bytes_field(9, &self.data_hash);
        w.bytes_field(10, &self.validators_hash);
        w.bytes_field(11, &self.next_validators_hash);
        w.bytes_field(12, &self.consensus_hash);
        w.bytes_field(13, &self.app_hash);
        w.bytes_field(14, &self.last_results_hash);
        w.bytes_field(15, &self.evidence_hash);
        w.bytes_field(16, &self.proposer_address);
        w.into_bytes()
    }

    pub(crate) fn decode(bytes: &[u8]) -> Result<Self, LightClientError> {
        let mut r = Reader::new(bytes);
        let mut header = Header::default();
        while !r.done() {
            let (field, wire) = r.read_tag()?;
            match field {
                3 | 5 | 6 => {
                    Reader::check_wire(field, wire, WIRE_VARINT)?;
                    let v = r.read_varint64()?;
                    match field {
                        3 => header.height = v,
                        5 => header.num_txs = v,
                        _ => header.total_txs = v,
                    }
                }
                _ => {
                    Reader::check_wire(field, wire, WIRE_BYTES)?;
                    match field {
                        1 => header.version = Version::decode(r.read_bytes()?)?,
                        2 => header.chain_id = r.read_string()?,
                        4 => header.time = Time::decode(r.read_bytes()?)?,
                        7 => header.last_block_id = BlockId::decode(r.read_bytes()?)?,
                        8 => header.last_commit_hash = r.read_bytes()?.to_vec(),
                        9 => header.data_hash = r.read_bytes()?.to_vec(),
                        10 => header.validators_hash = r.read_bytes()?.to_vec(),
                        11 => header.next_validators_hash = r.read_bytes()?.to_vec(),
                        12 => header.consensus_hash = r.read_bytes()?.to_vec(),
                        13 => header.app_hash = r.read_bytes()?.to_vec(),
                        14 => header.last_results_hash = r.read_bytes()?.to_vec(),
                        15 => header.evidence_hash = r.read_bytes()?.to_vec(),
                        16 => header.proposer_address = r.read_bytes()?.to_vec(),
                        _ => return Err(unknown_field(field, wire)),
                    }
                }
            }
        }
        Ok(header)
    }
}

/// The unit a source chain relayer ships and the relay contract stores:
/// a header, the commit that justifies it, and the validator set that
/// signed it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CosmosHeader {
    pub header: Header,
    pub commit: Commit,
    pub valsets: Vec<Validator>,
}

impl CosmosHeader {
    pub fn decode(bytes: &[u8]) -> Result<Self, LightClientError> {
        let mut r = Reader::new(bytes);
        let mut out = CosmosHeader::default();
        while !r.done() {
            let (field, wire) = r.read_tag()?;
            Reader::check_wire(field, wire, WIRE_BYTES)?;
            match field {
                1 => out.header = Header::decode(r.read_bytes()?)?,
                2 => out.commit = Commit::decode(r.read_bytes()?)?,
                3 => out.valsets.push(Validator::decode(r.read_bytes()?)?),
                _ => return Err(unknown_field(field, wire)),
            }
        }
        Ok(out)
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut w = Writer::new();
        w.struct_field(1, &self.header.encode());
        w.struct_field(2, &self.commit.encode());
        for validator in &self.valsets {
            w.struct_field_always(3, &validator.encode());
        }
        w.into_bytes()
    }
}

fn bare_string(s: &str) -> Vec<u8> {
    if s.is_empty() {
        return Vec::new();
    }
    encode::bare_bytes(s.as_bytes())
}

fn bare_varint(v: i64) -> Vec<u8> {
    encode::bare_varint64(v)
}

fn bare_bytes_or_empty(v: &[u8]) -> Vec<u8> {
    if v.is_empty() {
        return Vec::new();
    }
    encode::bare_bytes(v)
}

pub(crate) fn unknown_field(field: u32, wire_type: u8) -> LightClientError {
    LightClientError::Amino(crossgate_amino::AminoError::UnknownField { field, wire_type })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_round_trip() {
        let time = Time {
            seconds: 1_570_000_000,
            nanos: 123_456_789,
        };
        assert_eq!(Time::decode(&time.encode()).unwrap(), time);
    }

    #[test]
    fn block_id_round_trip() {
        let block_id = BlockId {
            hash: vec![0xaa; 32],
            parts: PartSetHeader {
                total: 1,
                hash: vec![0xbb; 32],
            },
        };
        assert_eq!(BlockId::decode(&block_id.encode()).unwrap(), block_id);
    }

    #[test]
    fn canonical_part_set_header_reverses_fields() {
        let parts = PartSetHeader {
            total: 1,
            hash: vec![0xcc; 32],
        };
        let wire = parts.encode();
        let canonical = parts.encode_canonical();
        // wire: total first (varint tag 0x08); canonical: hash first (0x0a)
        assert_eq!(wire[0], 0x08);
        assert_eq!(canonical[0], 0x0a);
    }

    #[test]
    fn zero_header_fields_hash_as_empty_leaves() {
        let header = Header {
            chain_id: "test".into(),
            height: 1,
            validators_hash: vec![0xaa; 32],
            ..Default::default()
        };
        // must not panic, and zero fields must still occupy leaf slots
        let with_data = Header {
            data_hash: vec![0xbb; 32],
            ..header.clone()
        };
        assert_ne!(header.hash(), with_data.hash());
    }

    #[test]
    fn header_hash_changes_with_any_field() {
        let base = Header {
            chain_id: "test".into(),
            height: 7,
            validators_hash: vec![0xaa; 32],
            app_hash: vec![0xcc; 32],
            ..Default::default()
        };
        let mut bumped = base.clone();
        bumped.height = 8;
        assert_ne!(base.hash(), bumped.hash());
    }
}
