//! Validator public keys: the three concrete variants Tendermint v0.32
//! registers, with their amino prefixes, signature verification, and
//! address derivation.

use ed25519_dalek::Verifier as _;
use k256::ecdsa::signature::Verifier as _;
use sha2::{Digest, Sha256};

use crossgate_amino::{encode, Reader, Writer, WIRE_BYTES, WIRE_VARINT};

use crate::error::LightClientError;
use crate::types::unknown_field;

/// Registered amino prefix for `tendermint/PubKeyEd25519`.
pub const ED25519_PREFIX: u32 = 0x1624de64;
/// Registered amino prefix for `tendermint/PubKeySecp256k1`.
pub const SECP256K1_PREFIX: u32 = 0xeb5ae987;
/// Registered amino prefix for `tendermint/PubKeyMultisigThreshold`.
pub const MULTISIG_PREFIX: u32 = 0x22c1f7e2;

pub const ED25519_KEY_LEN: usize = 32;
pub const SECP256K1_KEY_LEN: usize = 33;
pub const ED25519_SIG_LEN: usize = 64;
pub const SECP256K1_SIG_LEN: usize = 64;

const ADDRESS_LEN: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PubKey {
    Ed25519([u8; ED25519_KEY_LEN]),
    Secp256k1([u8; SECP256K1_KEY_LEN]),
    /// k-of-n threshold key over nested concrete keys.
    MultisigThreshold { threshold: u64, pub_keys: Vec<PubKey> },
}

impl PubKey {
    /// Amino interface payload: 4-byte registered prefix followed by the
    /// concrete key's bare encoding.
    pub fn encode(&self) -> Vec<u8> {
        let (prefix, concrete) = match self {
            PubKey::Ed25519(key) => (ED25519_PREFIX, encode::bare_bytes(key)),
            PubKey::Secp256k1(key) => (SECP256K1_PREFIX, encode::bare_bytes(key)),
            PubKey::MultisigThreshold {
                threshold,
                pub_keys,
            } => {
                let mut w = Writer::new();
                w.uvarint_field(1, *threshold);
                for key in pub_keys {
                    let inner = key.encode();
                    // nested keys are interface fields themselves
                    w.struct_field_always(2, &inner);
                }
                (MULTISIG_PREFIX, w.into_bytes())
            }
        };
        let mut out = prefix.to_be_bytes().to_vec();
        out.extend_from_slice(&concrete);
        out
    }

    /// Decodes an amino interface payload (prefix + concrete bare bytes).
    pub fn decode(prefix: u32, concrete: &[u8]) -> Result<Self, LightClientError> {
        match prefix {
            ED25519_PREFIX => {
                let key = read_fixed_key::<ED25519_KEY_LEN>(concrete)?;
                Ok(PubKey::Ed25519(key))
            }
            SECP256K1_PREFIX => {
                let key = read_fixed_key::<SECP256K1_KEY_LEN>(concrete)?;
                Ok(PubKey::Secp256k1(key))
            }
            MULTISIG_PREFIX => {
                let mut r = Reader::new(concrete);
                let mut threshold = 0u64;
                let mut pub_keys = Vec::new();
                while !r.done() {
                    let (field, wire) = r.read_tag()?;
                    match field {
                        1 => {
                            Reader::check_wire(field, wire, WIRE_VARINT)?;
                            threshold = r.read_uvarint()?;
                        }
                        2 => {
                            Reader::check_wire(field, wire, WIRE_BYTES)?;
                            let (sub_prefix, sub_concrete) = r.read_interface()?;
                            pub_keys.push(PubKey::decode(sub_prefix, sub_concrete)?);
                        }
                        _ => return Err(unknown_field(field, wire)),
                    }
                }
                Ok(PubKey::MultisigThreshold {
                    threshold,
                    pub_keys,
                })
            }
            other => Err(LightClientError::UnknownPubKeyPrefix(other)),
        }
    }

    /// First 20 bytes of SHA-256 over the raw key material (the full amino
    /// encoding for multisig keys). Bookkeeping only; addresses never
    /// enter consensus hashing here.
    pub fn address(&self) -> [u8; ADDRESS_LEN] {
        let digest = match self {
            PubKey::Ed25519(key) => Sha256::digest(key),
            PubKey::Secp256k1(key) => Sha256::digest(key),
            PubKey::MultisigThreshold { .. } => Sha256::digest(self.encode()),
        };
        let mut address = [0u8; ADDRESS_LEN];
        address.copy_from_slice(&digest[..ADDRESS_LEN]);
        address
    }

    /// Verifies `signature` over `msg`. Ed25519 signs the raw message,
    /// secp256k1 signs its SHA-256 (64-byte compact signature, high-s
    /// values normalized), multisig fans out over the set bits of its
    /// compact bit array.
    pub fn verify(&self, msg: &[u8], signature: &[u8]) -> bool {
        match self {
            PubKey::Ed25519(key) => verify_ed25519(key, msg, signature),
            PubKey::Secp256k1(key) => verify_secp256k1(key, msg, signature),
            PubKey::MultisigThreshold {
                threshold,
                pub_keys,
            } => verify_multisig(*threshold, pub_keys, msg, signature),
        }
    }
}

fn read_fixed_key<const N: usize>(concrete: &[u8]) -> Result<[u8; N], LightClientError> {
    let mut r = Reader::new(concrete);
    let bytes = r.read_bytes()?;
    r.expect_done()?;
    if bytes.len() != N {
        return Err(LightClientError::PubKeyLength {
            expected: N,
            actual: bytes.len(),
        });
    }
    let mut key = [0u8; N];
    key.copy_from_slice(bytes);
    Ok(key)
}

fn verify_ed25519(key: &[u8; ED25519_KEY_LEN], msg: &[u8], signature: &[u8]) -> bool {
    if signature.len() != ED25519_SIG_LEN {
        return false;
    }
    let Ok(verifying_key) = ed25519_dalek::VerifyingKey::from_bytes(key) else {
        return false;
    };
    let Ok(signature) = ed25519_dalek::Signature::from_slice(signature) else {
        return false;
    };
    verifying_key.verify(msg, &signature).is_ok()
}

fn verify_secp256k1(key: &[u8; SECP256K1_KEY_LEN], msg: &[u8], signature: &[u8]) -> bool {
    if signature.len() != SECP256K1_SIG_LEN {
        return false;
    }
    let Ok(verifying_key) = k256::ecdsa::VerifyingKey::from_sec1_bytes(key) else {
        return false;
    };
    let Ok(mut sig) = k256::ecdsa::Signature::from_slice(signature) else {
        return false;
    };
    if let Some(normalized) = sig.normalize_s() {
        sig = normalized;
    }
    verifying_key.verify(msg, &sig).is_ok()
}

/// Amino `AminoMultisignature`: a compact bit array selecting the signing
/// subset and one sub-signature per set bit.
struct Multisignature {
    extra_bits: u32,
    elems: Vec<u8>,
    sigs: Vec<Vec<u8>>,
}

impl Multisignature {
    fn decode(bytes: &[u8]) -> Result<Self, LightClientError> {
        let mut r = Reader::new(bytes);
        let mut out = Multisignature {
            extra_bits: 0,
            elems: Vec::new(),
            sigs: Vec::new(),
        };
        while !r.done() {
            let (field, wire) = r.read_tag()?;
            Reader::check_wire(field, wire, WIRE_BYTES)?;
            match field {
                1 => {
                    let mut inner = Reader::new(r.read_bytes()?);
                    while !inner.done() {
                        let (sub_field, sub_wire) = inner.read_tag()?;
                        match sub_field {
                            1 => {
                                Reader::check_wire(sub_field, sub_wire, WIRE_VARINT)?;
                                out.extra_bits = inner.read_uvarint()? as u32;
                            }
                            2 => {
                                Reader::check_wire(sub_field, sub_wire, WIRE_BYTES)?;
                                out.elems = inner.read_bytes()?.to_vec();
                            }
                            _ => return Err(unknown_field(sub_field, sub_wire)),
                        }
                    }
                }
                2 => out.sigs.push(r.read_bytes()?.to_vec()),
                _ => return Err(unknown_field(field, wire)),
            }
        }
        Ok(out)
    }

    fn size(&self) -> usize {
        if self.elems.is_empty() {
            return 0;
        }
        if self.extra_bits == 0 {
            return self.elems.len() * 8;
        }
        (self.elems.len() - 1) * 8 + self.extra_bits as usize
    }

    fn bit(&self, i: usize) -> bool {
        self.elems[i >> 3] & (1u8 << (7 - (i % 8))) != 0
    }
}

fn verify_multisig(threshold: u64, pub_keys: &[PubKey], msg: &[u8], signature: &[u8]) -> bool {
    let Ok(sig) = Multisignature::decode(signature) else {
        return false;
    };
    let size = sig.size();
    if pub_keys.len() != size {
        return false;
    }
    let set_bits = (0..size).filter(|&i| sig.bit(i)).count();
    if (set_bits as u64) < threshold || sig.sigs.len() != set_bits {
        return false;
    }
    let mut sig_index = 0;
    for (i, key) in pub_keys.iter().enumerate() {
        if sig.bit(i) {
            if !key.verify(msg, &sig.sigs[sig_index]) {
                return false;
            }
            sig_index += 1;
        }
    }
    true
}

/// Encodes a multisignature; only tests assemble these, but the layout is
/// the wire format relayers ship inside precommits.
pub fn encode_multisignature(total_keys: usize, signers: &[(usize, Vec<u8>)]) -> Vec<u8> {
    let elem_count = total_keys.div_ceil(8);
    let mut elems = vec![0u8; elem_count];
    for (index, _) in signers {
        elems[index >> 3] |= 1u8 << (7 - (index % 8));
    }
    let extra_bits = (total_keys % 8) as u64;

    let mut bit_array = Writer::new();
    bit_array.uvarint_field(1, extra_bits);
    bit_array.bytes_field(2, &elems);

    let mut w = Writer::new();
    w.struct_field(1, &bit_array.into_bytes());
    for (_, sig) in signers {
        w.struct_field_always(2, sig);
    }
    w.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::Signer as _;
    use k256::ecdsa::signature::Signer as _;

    fn ed25519_pair(seed: u8) -> (ed25519_dalek::SigningKey, PubKey) {
        let signing = ed25519_dalek::SigningKey::from_bytes(&[seed; 32]);
        let pub_key = PubKey::Ed25519(signing.verifying_key().to_bytes());
        (signing, pub_key)
    }

    #[test]
    fn ed25519_verify_round_trip() {
        let (signing, pub_key) = ed25519_pair(1);
        let msg = b"precommit payload";
        let sig = signing.sign(msg);
        assert!(pub_key.verify(msg, &sig.to_bytes()));
        assert!(!pub_key.verify(b"other payload", &sig.to_bytes()));
    }

    #[test]
    fn secp256k1_verify_round_trip() {
        let signing = k256::ecdsa::SigningKey::from_slice(&[7u8; 32]).unwrap();
        let compressed = signing.verifying_key().to_sec1_bytes();
        let mut key = [0u8; SECP256K1_KEY_LEN];
        key.copy_from_slice(&compressed);
        let pub_key = PubKey::Secp256k1(key);

        let msg = b"precommit payload";
        let sig: k256::ecdsa::Signature = signing.sign(msg);
        assert!(pub_key.verify(msg, &sig.to_bytes()));
        assert!(!pub_key.verify(b"other payload", &sig.to_bytes()));
    }

    #[test]
    fn ed25519_encode_decode_round_trip() {
        let (_, pub_key) = ed25519_pair(2);
        let encoded = pub_key.encode();
        assert_eq!(encoded.len(), 4 + 1 + 32);
        assert_eq!(&encoded[..4], &ED25519_PREFIX.to_be_bytes());
        let decoded = PubKey::decode(ED25519_PREFIX, &encoded[4..]).unwrap();
        assert_eq!(decoded, pub_key);
    }

    #[test]
    fn unknown_prefix_rejected() {
        let err = PubKey::decode(0xdeadbeef, &[0x20; 33]).unwrap_err();
        assert_eq!(err, LightClientError::UnknownPubKeyPrefix(0xdeadbeef));
    }

    #[test]
    fn address_is_truncated_sha256() {
        let (_, pub_key) = ed25519_pair(3);
        let PubKey::Ed25519(raw) = &pub_key else {
            unreachable!()
        };
        let full = Sha256::digest(raw);
        assert_eq!(pub_key.address(), full[..20]);
    }

    #[test]
    fn multisig_two_of_three() {
        let pairs: Vec<_> = (10u8..13).map(ed25519_pair).collect();
        let pub_keys: Vec<_> = pairs.iter().map(|(_, pk)| pk.clone()).collect();
        let multisig = PubKey::MultisigThreshold {
            threshold: 2,
            pub_keys: pub_keys.clone(),
        };
        let msg = b"threshold payload";

        let signers: Vec<(usize, Vec<u8>)> = [0usize, 2]
            .iter()
            .map(|&i| (i, pairs[i].0.sign(msg).to_bytes().to_vec()))
            .collect();
        let sig = encode_multisignature(3, &signers);
        assert!(multisig.verify(msg, &sig));

        // one signature below threshold fails
        let sig = encode_multisignature(3, &signers[..1]);
        assert!(!multisig.verify(msg, &sig));

        // a corrupted sub-signature fails
        let mut bad_signers = signers;
        bad_signers[1].1[5] ^= 0x01;
        let sig = encode_multisignature(3, &bad_signers);
        assert!(!multisig.verify(msg, &sig));
    }

    #[test]
    fn multisig_encode_decode_round_trip() {
        let pub_keys: Vec<_> = (20u8..22).map(|s| ed25519_pair(s).1).collect();
        let multisig = PubKey::MultisigThreshold {
            threshold: 2,
            pub_keys,
        };
        let encoded = multisig.encode();
        assert_eq!(&encoded[..4], &MULTISIG_PREFIX.to_be_bytes());
        let decoded = PubKey::decode(MULTISIG_PREFIX, &encoded[4..]).unwrap();
        assert_eq!(decoded, multisig);
    }
}
