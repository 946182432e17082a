//! Precommit votes, commits, and canonical sign bytes.

use crossgate_amino::{encode, Reader, Writer, WIRE_BYTES, WIRE_VARINT};

use crate::error::LightClientError;
use crate::types::{unknown_field, BlockId, Time};

/// `SignedMsgType` value for precommits.
pub const PRECOMMIT_TYPE: u8 = 0x02;

/// A precommit vote as carried inside a commit. Votes for a different
/// block (or nil) keep their own `block_id`; missing votes are `None`
/// slots in the commit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vote {
    pub vote_type: u8,
    pub height: i64,
    pub round: i64,
    pub block_id: BlockId,
    pub timestamp: Time,
    pub validator_address: Vec<u8>,
    pub validator_index: i64,
    pub signature: Vec<u8>,
}

impl Vote {
    /// Canonical sign bytes: the length-prefixed amino encoding of the
    /// canonical vote. Bit drift here breaks every signature check, so the
    /// layout mirrors Tendermint v0.32 exactly: type as varint, height and
    /// round as fixed64 (omitted when zero), the block id with the
    /// part-set-header fields reversed, then timestamp and chain id.
    pub fn sign_bytes(&self, chain_id: &str) -> Vec<u8> {
        let mut w = Writer::new();
        w.uvarint_field(1, u64::from(self.vote_type));
        w.fixed64_field(2, self.height as u64);
        w.fixed64_field(3, self.round as u64);
        w.struct_field(4, &self.block_id.encode_canonical());
        w.struct_field(5, &self.timestamp.encode());
        w.string_field(6, chain_id);
        encode::length_prefixed(&w.into_bytes())
    }

    pub(crate) fn encode(&self) -> Vec<u8> {
        let mut w = Writer::new();
        w.uvarint_field(1, u64::from(self.vote_type));
        w.varint64_field(2, self.height);
        w.varint64_field(3, self.round);
        w.struct_field(4, &self.block_id.encode());
        w.struct_field(5, &self.timestamp.encode());
        w.bytes_field(6, &self.validator_address);
        w.varint64_field(7, self.validator_index);
        w.bytes_field(8, &self.signature);
        w.into_bytes()
    }

    pub(crate) fn decode(bytes: &[u8]) -> Result<Self, LightClientError> {
        let mut r = Reader::new(bytes);
        let mut vote = Vote::default();
        while !r.done() {
            let (field, wire) = r.read_tag()?;
            match field {
                1 | 2 | 3 | 7 => {
                    Reader::check_wire(field, wire, WIRE_VARINT)?;
                    let v = r.read_varint64()?;
                    match field {
                        1 => vote.vote_type = v as u8,
                        2 => vote.height = v,
                        3 => vote.round = v,
                        _ => vote.validator_index = v,
                    }
                }
                _ => {
                    Reader::check_wire(field, wire, WIRE_BYTES)?;
                    match field {
                        4 => vote.block_id = BlockId::decode(r.read_bytes()?)?,
                        5 => vote.timestamp = Time::decode(r.read_bytes()?)?,
                        6 => vote.validator_address = r.read_bytes()?.to_vec(),
                        8 => vote.signature = r.read_bytes()?.to_vec(),
                        _ => return Err(unknown_field(field, wire)),
                    }
                }
            }
        }
        Ok(vote)
    }
}

/// The set of precommits that justifies a block, indexed by validator
/// position. Slots without a vote are `None` and still occupy their
/// position on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Commit {
    pub block_id: BlockId,
    pub precommits: Vec<Option<Vote>>,
}

impl Commit {
    /// Height of the first present precommit; commits are validated to be
    /// uniform, so any present slot is authoritative.
    pub fn height(&self) -> i64 {
        self.first_precommit().map_or(0, |vote| vote.height)
    }

    pub fn round(&self) -> i64 {
        self.first_precommit().map_or(0, |vote| vote.round)
    }

    fn first_precommit(&self) -> Option<&Vote> {
        self.precommits.iter().flatten().next()
    }

    /// Structural checks: a real block id, at least one precommit slot,
    /// and every present vote a precommit for the same height and round.
    pub fn validate_basic(&self) -> Result<(), LightClientError> {
        if self.block_id.is_zero() {
            return Err(LightClientError::invalid_commit(
                "commit cannot be for a nil block",
            ));
        }
        if self.precommits.is_empty() {
            return Err(LightClientError::invalid_commit("no precommits in commit"));
        }
        let height = self.height();
        let round = self.round();
        for (index, precommit) in self.precommits.iter().enumerate() {
            let Some(precommit) = precommit else {
                continue;
            };
            if precommit.vote_type != PRECOMMIT_TYPE {
                return Err(LightClientError::invalid_commit(format!(
                    "precommit {index} has vote type {}",
                    precommit.vote_type
                )));
            }
            if precommit.height != height {
                return Err(LightClientError::invalid_commit(format!(
                    "precommit {index} is for height {}, commit is for {height}",
                    precommit.height
                )));
            }
            if precommit.round != round {
                return Err(LightClientError::invalid_commit(format!(
                    "precommit {index} is for round {}, commit is for {round}",
                    precommit.round
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn encode(&self) -> Vec<u8> {
        let mut w = Writer::new();
        w.struct_field(1, &self.block_id.encode());
        for precommit in &self.precommits {
            match precommit {
                Some(vote) => w.struct_field_always(2, &vote.encode()),
                None => w.struct_field_always(2, &[]),
            }
        }
        w.into_bytes()
    }

    pub(crate) fn decode(bytes: &[u8]) -> Result<Self, LightClientError> {
        let mut r = Reader::new(bytes);
        let mut commit = Commit::default();
        while !r.done() {
            let (field, wire) = r.read_tag()?;
            Reader::check_wire(field, wire, WIRE_BYTES)?;
            match field {
                1 => commit.block_id = BlockId::decode(r.read_bytes()?)?,
                2 => {
                    let payload = r.read_bytes()?;
                    if payload.is_empty() {
                        commit.precommits.push(None);
                    } else {
                        commit.precommits.push(Some(Vote::decode(payload)?));
                    }
                }
                _ => return Err(unknown_field(field, wire)),
            }
        }
        Ok(commit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PartSetHeader;

    fn block_id(tag: u8) -> BlockId {
        BlockId {
            hash: vec![tag; 32],
            parts: PartSetHeader {
                total: 1,
                hash: vec![tag ^ 0xff; 32],
            },
        }
    }

    fn vote(height: i64, index: i64) -> Vote {
        Vote {
            vote_type: PRECOMMIT_TYPE,
            height,
            round: 0,
            block_id: block_id(0xab),
            timestamp: Time {
                seconds: 1_570_000_000,
                nanos: 42,
            },
            validator_address: vec![0x11; 20],
            validator_index: index,
            signature: vec![0x22; 64],
        }
    }

    #[test]
    fn commit_round_trip_with_missing_votes() {
        let commit = Commit {
            block_id: block_id(0xab),
            precommits: vec![Some(vote(5, 0)), None, Some(vote(5, 2))],
        };
        let decoded = Commit::decode(&commit.encode()).unwrap();
        assert_eq!(decoded, commit);
        assert_eq!(decoded.height(), 5);
    }

    #[test]
    fn validate_basic_rejects_nil_block() {
        let commit = Commit {
            block_id: BlockId::default(),
            precommits: vec![Some(vote(5, 0))],
        };
        assert!(commit.validate_basic().is_err());
    }

    #[test]
    fn validate_basic_rejects_mixed_heights() {
        let commit = Commit {
            block_id: block_id(0xab),
            precommits: vec![Some(vote(5, 0)), Some(vote(6, 1))],
        };
        assert!(commit.validate_basic().is_err());
    }

    #[test]
    fn validate_basic_rejects_non_precommit_votes() {
        let mut prevote = vote(5, 0);
        prevote.vote_type = 0x01;
        let commit = Commit {
            block_id: block_id(0xab),
            precommits: vec![Some(prevote)],
        };
        assert!(commit.validate_basic().is_err());
    }

    #[test]
    fn sign_bytes_layout() {
        let v = vote(10000, 0);
        let bytes = v.sign_bytes("gaia-13007");

        // length prefix, then type varint, then fixed64 height
        let mut r = crossgate_amino::Reader::new(&bytes);
        let body = r.read_bytes().unwrap();
        assert!(r.done());
        assert_eq!(body[0], 0x08); // field 1, varint
        assert_eq!(body[1], 0x02); // precommit
        assert_eq!(body[2], 0x11); // field 2, fixed64
        assert_eq!(&body[3..11], &10000u64.to_le_bytes());
        // round 0 is omitted: next tag is the canonical block id
        assert_eq!(body[11], 0x22);
        // chain id rides at the tail
        let tail = &body[body.len() - 12..];
        assert_eq!(tail[0], 0x32);
        assert_eq!(tail[1], 0x0a);
        assert_eq!(&tail[2..], b"gaia-13007");
    }

    #[test]
    fn sign_bytes_differ_per_chain() {
        let v = vote(10000, 0);
        assert_ne!(v.sign_bytes("gaia-13007"), v.sign_bytes("gaia-13008"));
    }

    #[test]
    fn nil_vote_block_id_is_omitted_from_sign_bytes() {
        let mut v = vote(10000, 0);
        v.block_id = BlockId::default();
        let with_block = vote(10000, 0).sign_bytes("gaia-13007");
        let nil_vote = v.sign_bytes("gaia-13007");
        assert!(nil_vote.len() < with_block.len());
    }
}
