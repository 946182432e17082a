//! Leaf and inner op application and spec-compliance checks.

use sha2::{Digest, Sha256};

use crossgate_proto::cosmos::ics23::v1::{HashOp, InnerOp, LeafOp, LengthOp, ProofSpec};

use crate::error::Ics23Error;

/// Applies a leaf op: `hash(prefix ‖ length(prehash(key)) ‖ length(prehash(value)))`.
pub fn apply_leaf(op: &LeafOp, key: &[u8], value: &[u8]) -> Result<Vec<u8>, Ics23Error> {
    if key.is_empty() {
        return Err(Ics23Error::MissingKey);
    }
    if value.is_empty() {
        return Err(Ics23Error::MissingValue);
    }
    let pkey = prepare_leaf_data(op.prehash_key, op.length, key)?;
    let pvalue = prepare_leaf_data(op.prehash_value, op.length, value)?;

    let mut data = op.prefix.clone();
    data.extend_from_slice(&pkey);
    data.extend_from_slice(&pvalue);
    do_hash(op.hash, &data)
}

/// Applies an inner op: `hash(prefix ‖ child ‖ suffix)`.
pub fn apply_inner(op: &InnerOp, child: &[u8]) -> Result<Vec<u8>, Ics23Error> {
    if child.is_empty() {
        return Err(Ics23Error::MissingChild);
    }
    let mut preimage = op.prefix.clone();
    preimage.extend_from_slice(child);
    preimage.extend_from_slice(&op.suffix);
    do_hash(op.hash, &preimage)
}

fn prepare_leaf_data(prehash: i32, length: i32, data: &[u8]) -> Result<Vec<u8>, Ics23Error> {
    let hashed = do_hash_or_noop(prehash, data)?;
    do_length(length, hashed)
}

/// `NO_HASH` passes data through; everything else hashes.
fn do_hash_or_noop(op: i32, data: &[u8]) -> Result<Vec<u8>, Ics23Error> {
    if op == HashOp::NoHash as i32 {
        return Ok(data.to_vec());
    }
    do_hash(op, data)
}

/// Only SHA-256 is in service; the other registered ops are rejected
/// rather than silently producing an unverifiable root.
pub fn do_hash(op: i32, data: &[u8]) -> Result<Vec<u8>, Ics23Error> {
    match HashOp::try_from(op) {
        Ok(HashOp::Sha256) => Ok(Sha256::digest(data).to_vec()),
        _ => Err(Ics23Error::UnsupportedHashOp(op)),
    }
}

fn do_length(op: i32, mut data: Vec<u8>) -> Result<Vec<u8>, Ics23Error> {
    match LengthOp::try_from(op) {
        Ok(LengthOp::NoPrefix) => Ok(data),
        Ok(LengthOp::VarProto) => {
            let mut out = proto_len(data.len());
            out.append(&mut data);
            Ok(out)
        }
        Ok(LengthOp::Require32Bytes) => require_len(data, 32),
        Ok(LengthOp::Require64Bytes) => require_len(data, 64),
        Ok(LengthOp::Fixed32Big) => {
            let mut out = (data.len() as u32).to_be_bytes().to_vec();
            out.append(&mut data);
            Ok(out)
        }
        Ok(LengthOp::Fixed32Little) => {
            let mut out = (data.len() as u32).to_le_bytes().to_vec();
            out.append(&mut data);
            Ok(out)
        }
        Ok(LengthOp::Fixed64Big) => {
            let mut out = (data.len() as u64).to_be_bytes().to_vec();
            out.append(&mut data);
            Ok(out)
        }
        Ok(LengthOp::Fixed64Little) => {
            let mut out = (data.len() as u64).to_le_bytes().to_vec();
            out.append(&mut data);
            Ok(out)
        }
        _ => Err(Ics23Error::UnsupportedLengthOp(op)),
    }
}

fn require_len(data: Vec<u8>, expected: usize) -> Result<Vec<u8>, Ics23Error> {
    if data.len() != expected {
        return Err(Ics23Error::WrongLengthData {
            expected,
            actual: data.len(),
        });
    }
    Ok(data)
}

fn proto_len(mut n: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(2);
    loop {
        let b = (n & 0x7f) as u8;
        n >>= 7;
        if n == 0 {
            out.push(b);
            return out;
        }
        out.push(b | 0x80);
    }
}

/// A leaf op must match the spec's leaf exactly, except the prefix, where
/// the spec only pins the leading bytes.
pub fn check_leaf_against_spec(op: &LeafOp, spec: &ProofSpec) -> Result<(), Ics23Error> {
    let lspec = spec
        .leaf_spec
        .as_ref()
        .ok_or(Ics23Error::IncompleteSpec("leaf spec"))?;
    if op.hash != lspec.hash {
        return Err(Ics23Error::spec_mismatch("leaf hash op differs from spec"));
    }
    if op.prehash_key != lspec.prehash_key {
        return Err(Ics23Error::spec_mismatch("leaf prehash_key differs from spec"));
    }
    if op.prehash_value != lspec.prehash_value {
        return Err(Ics23Error::spec_mismatch(
            "leaf prehash_value differs from spec",
        ));
    }
    if op.length != lspec.length {
        return Err(Ics23Error::spec_mismatch("leaf length op differs from spec"));
    }
    if !op.prefix.starts_with(&lspec.prefix) {
        return Err(Ics23Error::spec_mismatch("leaf prefix differs from spec"));
    }
    Ok(())
}

/// Inner-op constraints: the right hash, a prefix that cannot be mistaken
/// for a leaf, and padding sizes consistent with the tree arity.
pub fn check_inner_against_spec(op: &InnerOp, spec: &ProofSpec) -> Result<(), Ics23Error> {
    let ispec = spec
        .inner_spec
        .as_ref()
        .ok_or(Ics23Error::IncompleteSpec("inner spec"))?;
    let lspec = spec
        .leaf_spec
        .as_ref()
        .ok_or(Ics23Error::IncompleteSpec("leaf spec"))?;

    if op.hash != ispec.hash {
        return Err(Ics23Error::spec_mismatch("inner hash op differs from spec"));
    }
    if !lspec.prefix.is_empty() && op.prefix.starts_with(&lspec.prefix) {
        return Err(Ics23Error::spec_mismatch("inner prefix starts with leaf prefix"));
    }
    if (op.prefix.len() as i32) < ispec.min_prefix_length {
        return Err(Ics23Error::spec_mismatch("inner prefix too short"));
    }
    let max_left_child_bytes = (ispec.child_order.len() as i32 - 1) * ispec.child_size;
    if (op.prefix.len() as i32) > ispec.max_prefix_length + max_left_child_bytes {
        return Err(Ics23Error::spec_mismatch("inner prefix too long"));
    }
    if ispec.child_size <= 0 {
        return Err(Ics23Error::spec_mismatch("spec child size must be positive"));
    }
    if (op.suffix.len() as i32) % ispec.child_size != 0 {
        return Err(Ics23Error::spec_mismatch(
            "inner suffix is not a whole number of children",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{iavl_spec, tendermint_spec};

    fn sha256(data: &[u8]) -> Vec<u8> {
        Sha256::digest(data).to_vec()
    }

    #[test]
    fn leaf_op_hashes_prefixed_lengthed_pair() {
        // tendermint-style leaf: 0x00 ‖ varint(len(key)) ‖ key ‖ varint(32) ‖ sha256(value)
        let spec = tendermint_spec();
        let leaf = spec.leaf_spec.clone().unwrap();
        let got = apply_leaf(&leaf, b"storekey", b"storevalue").unwrap();

        let mut preimage = vec![0x00];
        preimage.push(8); // len("storekey")
        preimage.extend_from_slice(b"storekey");
        preimage.push(32);
        preimage.extend_from_slice(&sha256(b"storevalue"));
        assert_eq!(got, sha256(&preimage));
    }

    #[test]
    fn leaf_op_rejects_empty_key_and_value() {
        let leaf = tendermint_spec().leaf_spec.unwrap();
        assert_eq!(apply_leaf(&leaf, b"", b"v"), Err(Ics23Error::MissingKey));
        assert_eq!(apply_leaf(&leaf, b"k", b""), Err(Ics23Error::MissingValue));
    }

    #[test]
    fn inner_op_concatenates_around_child() {
        let op = InnerOp {
            hash: HashOp::Sha256 as i32,
            prefix: vec![0x01],
            suffix: vec![0xee; 32],
        };
        let child = [0xaa; 32];
        let got = apply_inner(&op, &child).unwrap();

        let mut preimage = vec![0x01];
        preimage.extend_from_slice(&child);
        preimage.extend_from_slice(&[0xee; 32]);
        assert_eq!(got, sha256(&preimage));
    }

    #[test]
    fn inner_op_rejects_empty_child() {
        let op = InnerOp {
            hash: HashOp::Sha256 as i32,
            prefix: vec![0x01],
            suffix: vec![],
        };
        assert_eq!(apply_inner(&op, &[]), Err(Ics23Error::MissingChild));
    }

    #[test]
    fn unsupported_hash_ops_rejected() {
        assert_eq!(
            do_hash(HashOp::Keccak as i32, b"data"),
            Err(Ics23Error::UnsupportedHashOp(HashOp::Keccak as i32))
        );
        assert_eq!(do_hash(99, b"data"), Err(Ics23Error::UnsupportedHashOp(99)));
    }

    #[test]
    fn proto_len_is_leb128() {
        assert_eq!(proto_len(0), vec![0x00]);
        assert_eq!(proto_len(32), vec![0x20]);
        assert_eq!(proto_len(200), vec![0xc8, 0x01]);
    }

    #[test]
    fn leaf_spec_check_pins_every_op() {
        let spec = iavl_spec();
        let mut leaf = spec.leaf_spec.clone().unwrap();
        check_leaf_against_spec(&leaf, &spec).unwrap();

        leaf.prehash_value = HashOp::NoHash as i32;
        assert!(check_leaf_against_spec(&leaf, &spec).is_err());
    }

    #[test]
    fn leaf_prefix_is_a_prefix_match() {
        let spec = iavl_spec();
        let mut leaf = spec.leaf_spec.clone().unwrap();
        // IAVL leaves carry height/size/version varints after the 0x00
        leaf.prefix = vec![0x00, 0x02, 0x0c];
        check_leaf_against_spec(&leaf, &spec).unwrap();

        leaf.prefix = vec![0x01, 0x02];
        assert!(check_leaf_against_spec(&leaf, &spec).is_err());
    }

    #[test]
    fn inner_spec_check_enforces_prefix_window() {
        let spec = iavl_spec();
        let ok = InnerOp {
            hash: HashOp::Sha256 as i32,
            prefix: vec![0x02, 0x04, 0x02, 0x0a],
            suffix: vec![0x00; 33],
        };
        check_inner_against_spec(&ok, &spec).unwrap();

        let leaf_like = InnerOp {
            hash: HashOp::Sha256 as i32,
            prefix: vec![0x00, 0x02, 0x02, 0x0a],
            suffix: vec![],
        };
        assert!(check_inner_against_spec(&leaf_like, &spec).is_err());

        let short = InnerOp {
            hash: HashOp::Sha256 as i32,
            prefix: vec![0x02, 0x04],
            suffix: vec![],
        };
        assert!(check_inner_against_spec(&short, &spec).is_err());

        // 12 (max) + 33 (one left child) is the ceiling; one more byte fails
        let long = InnerOp {
            hash: HashOp::Sha256 as i32,
            prefix: vec![0x02; 46],
            suffix: vec![],
        };
        assert!(check_inner_against_spec(&long, &spec).is_err());

        let ragged_suffix = InnerOp {
            hash: HashOp::Sha256 as i32,
            prefix: vec![0x02, 0x04, 0x02, 0x0a],
            suffix: vec![0x00; 20],
        };
        assert!(check_inner_against_spec(&ragged_suffix, &spec).is_err());
    }
}
