//! Validators and validator sets.

use crossgate_amino::{Reader, Writer, WIRE_BYTES, WIRE_VARINT};
use crossgate_merkle::hash_from_slices;

use crate::error::LightClientError;
use crate::pubkey::PubKey;
use crate::types::unknown_field;

#[derive(Clone, Debug, PartialEq)]
pub struct Validator {
    pub address: Vec<u8>,
    pub pub_key: PubKey,
    pub voting_power: i64,
    pub proposer_priority: i64,
}

impl Validator {
    pub(crate) fn encode(&self) -> Vec<u8> {
        let mut w = Writer::new();
        w.bytes_field(1, &self.address);
        let pub_key = self.pub_key.encode();
        // encode() already carries the 4-byte prefix
        w.struct_field_always(2, &pub_key);
        w.varint64_field(3, self.voting_power);
        w.varint64_field(4, self.proposer_priority);
        w.into_bytes()
    }

    pub(crate) fn decode(bytes: &[u8]) -> Result<Self, LightClientError> {
        let mut r = Reader::new(bytes);
        let mut address = Vec::new();
        let mut pub_key = None;
        let mut voting_power = 0i64;
        let mut proposer_priority = 0i64;
        while !r.done() {
            let (field, wire) = r.read_tag()?;
            match field {
                1 => {
                    Reader::check_wire(field, wire, WIRE_BYTES)?;
                    address = r.read_bytes()?.to_vec();
                }
                2 => {
                    Reader::check_wire(field, wire, WIRE_BYTES)?;
                    let (prefix, concrete) = r.read_interface()?;
                    pub_key = Some(PubKey::decode(prefix, concrete)?);
                }
                3 => {
                    Reader::check_wire(field, wire, WIRE_VARINT)?;
                    voting_power = r.read_varint64()?;
                }
                4 => {
                    Reader::check_wire(field, wire, WIRE_VARINT)?;
                    proposer_priority = r.read_varint64()?;
                }
                _ => return Err(unknown_field(field, wire)),
            }
        }
        let pub_key = pub_key.ok_or_else(|| {
            LightClientError::Amino(crossgate_amino::AminoError::malformed(
                "validator without a public key",
            ))
        })?;
        Ok(Validator {
            address,
            pub_key,
            voting_power,
            proposer_priority,
        })
    }

    /// The hashable form: `(pub_key, voting_power)`, nothing else.
    fn hash_bytes(&self) -> Vec<u8> {
        let mut w = Writer::new();
        let pub_key = self.pub_key.encode();
        w.struct_field_always(1, &pub_key);
        w.varint64_field(2, self.voting_power);
        w.into_bytes()
    }
}

/// An ordered validator set. Order is part of the hash, so it is preserved
/// exactly as decoded from the wire.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatorSet {
    validators: Vec<Validator>,
}

impl ValidatorSet {
    pub fn new(validators: Vec<Validator>) -> Self {
        ValidatorSet { validators }
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Validator> {
        self.validators.get(index)
    }

    /// Simple Merkle root over the validators' `(pub_key, voting_power)`
    /// encodings, in set order.
    pub fn hash(&self) -> [u8; 32] {
        let leaves: Vec<Vec<u8>> = self.validators.iter().map(Validator::hash_bytes).collect();
        hash_from_slices(&leaves)
    }

    pub fn total_power(&self) -> Result<i64, LightClientError> {
        let mut total = 0i64;
        for validator in &self.validators {
            total = total
                .checked_add(validator.voting_power)
                .ok_or(LightClientError::VotingPowerOverflow)?;
        }
        Ok(total)
    }
}
