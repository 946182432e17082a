//! The commitment-op runtime: decodes a relayer-submitted proof into a
//! chain of ICS-23 ops and reduces a `(key, value)` leaf through the
//! application substore up to a multistore root.

use prost::Message;
use tendermint_proto::crypto::ProofOps;

use crossgate_ics23::{
    calculate_root, iavl_spec, tendermint_spec, verify_membership, verify_non_membership,
    CommitmentProof, ProofSpec,
};

use crate::error::ContractError;

/// Op type for IAVL substore proofs.
pub const PROOF_OP_IAVL: &str = "ics23:iavl";
/// Op type for Tendermint simple-Merkle (multistore) proofs.
pub const PROOF_OP_SIMPLE: &str = "ics23:simple";

/// Substore the cross-chain manager writes into on Cosmos side chains.
pub const CCM_SUBSTORE: &[u8] = b"acc";
/// Store-key prefix of cross-chain message records inside that substore.
pub const CROSS_CHAIN_MSG_KEY_PREFIX: u8 = 0x01;

/// The store key a side chain's CCM contract uses for its message records.
pub fn cross_chain_msg_key(ccmc_address: &[u8]) -> Vec<u8> {
    let mut key = vec![CROSS_CHAIN_MSG_KEY_PREFIX];
    key.extend_from_slice(ccmc_address);
    key
}

/// Which proof spec an op runs under. The spec is never on the wire; it
/// is selected from the op type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitmentOpType {
    Iavl,
    Simple,
}

impl CommitmentOpType {
    fn spec(self) -> ProofSpec {
        match self {
            CommitmentOpType::Iavl => iavl_spec(),
            CommitmentOpType::Simple => tendermint_spec(),
        }
    }
}

/// One decoded proof op: a commitment proof for `key` under a spec chosen
/// by the op type.
#[derive(Debug)]
pub struct CommitmentOp {
    pub op_type: CommitmentOpType,
    pub key: Vec<u8>,
    pub proof: CommitmentProof,
}

impl CommitmentOp {
    /// Runs the op. One argument proves membership of `(key, args[0])`,
    /// zero arguments prove absence of `key`. Returns the root the op's
    /// embedded proof hashes up to.
    pub fn run(&self, args: &[&[u8]]) -> Result<Vec<u8>, ContractError> {
        let spec = self.op_type.spec();
        let root = calculate_root(&self.proof)
            .map_err(|e| ContractError::verify_proof(format!("cannot calculate root: {e}")))?;
        match args {
            [] => verify_non_membership(&spec, &root, &self.proof, &self.key)
                .map_err(|e| ContractError::verify_proof(format!("absence not proven: {e}")))?,
            [value] => verify_membership(&spec, &root, &self.proof, &self.key, value)
                .map_err(|e| ContractError::verify_proof(format!("existence not proven: {e}")))?,
            _ => {
                return Err(ContractError::verify_proof(format!(
                    "args must be length 0 or 1, got {}",
                    args.len()
                )))
            }
        }
        Ok(root)
    }
}

/// Decodes raw proof bytes into the ordered op list. Unknown op types and
/// unparseable payloads are format errors.
pub fn decode_proof_ops(proof_bytes: &[u8]) -> Result<Vec<CommitmentOp>, ContractError> {
    let ops = ProofOps::decode(proof_bytes)
        .map_err(|e| ContractError::proof_format(format!("unmarshal proof error: {e}")))?;
    if ops.ops.is_empty() {
        return Err(ContractError::proof_format("proof has no ops"));
    }
    ops.ops
        .into_iter()
        .map(|op| {
            let op_type = match op.r#type.as_str() {
                PROOF_OP_IAVL => CommitmentOpType::Iavl,
                PROOF_OP_SIMPLE => CommitmentOpType::Simple,
                other => {
                    return Err(ContractError::proof_format(format!(
                        "unexpected proof op type {other:?}"
                    )))
                }
            };
            let proof = CommitmentProof::decode(op.data.as_slice())
                .map_err(|e| ContractError::proof_format(format!("unmarshal proof op error: {e}")))?;
            Ok(CommitmentOp {
                op_type,
                key: op.key,
                proof,
            })
        })
        .collect()
}

/// Verifies that `value` sits at the key path described by `keys` (leaf
/// outward, one key per op) under the trusted `root`. The first op takes
/// the leaf value; every later op takes the previous op's root.
pub fn verify_key_value(
    ops: &[CommitmentOp],
    root: &[u8],
    keys: &[&[u8]],
    value: &[u8],
) -> Result<(), ContractError> {
    if ops.len() != keys.len() {
        return Err(ContractError::verify_proof(format!(
            "proof has {} ops, key path has {} elements",
            ops.len(),
            keys.len()
        )));
    }
    let mut arg = value.to_vec();
    for (op, key) in ops.iter().zip(keys) {
        if op.key != *key {
            return Err(ContractError::verify_proof(format!(
                "proof op key {} does not match expected key {}",
                hex::encode(&op.key),
                hex::encode(key)
            )));
        }
        arg = op.run(&[arg.as_slice()])?;
    }
    if arg != root {
        return Err(ContractError::verify_proof(
            "verify proof value hash failed: root mismatch",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossgate_ics23::{commitment_proof, ExistenceProof, HashOp, InnerOp};
    use prost::Message;
    use sha2::{Digest, Sha256};
    use tendermint_proto::crypto::ProofOp;

    fn sha256(data: &[u8]) -> Vec<u8> {
        Sha256::digest(data).to_vec()
    }

    fn tm_leaf_hash(key: &[u8], value: &[u8]) -> Vec<u8> {
        let mut preimage = vec![0x00];
        preimage.push(key.len() as u8);
        preimage.extend_from_slice(key);
        preimage.push(32);
        preimage.extend_from_slice(&sha256(value));
        sha256(&preimage)
    }

    fn tm_inner_hash(left: &[u8], right: &[u8]) -> Vec<u8> {
        let mut preimage = vec![0x01];
        preimage.extend_from_slice(left);
        preimage.extend_from_slice(right);
        sha256(&preimage)
    }

    fn iavl_leaf() -> crossgate_ics23::LeafOp {
        let mut leaf = iavl_spec().leaf_spec.unwrap();
        leaf.prefix = vec![0x00, 0x02, 0x02];
        leaf
    }

    /// A single-op IAVL proof for `(key, value)` whose sibling is `other`.
    fn iavl_proof(key: &[u8], value: &[u8], other: &[u8]) -> (Vec<u8>, CommitmentProof) {
        let leaf = iavl_leaf();
        let mut prefix = vec![0x02, 0x04, 0x02, 0x0a, 0x20];
        prefix.extend_from_slice(other);
        let step = InnerOp {
            hash: HashOp::Sha256 as i32,
            prefix,
            suffix: vec![],
        };
        let proof = ExistenceProof {
            key: key.to_vec(),
            value: value.to_vec(),
            leaf: Some(leaf),
            path: vec![step.clone()],
        };
        let root = crossgate_ics23::calculate_existence_root(&proof).unwrap();
        (
            root,
            CommitmentProof {
                proof: Some(commitment_proof::Proof::Exist(proof)),
            },
        )
    }

    /// A two-store multistore proof for `(store_key, store_root)` with a
    /// sibling store.
    fn simple_proof(
        store_key: &[u8],
        store_root: &[u8],
        sibling: &[u8],
    ) -> (Vec<u8>, CommitmentProof) {
        let sibling_hash = tm_leaf_hash(b"main", sibling);
        let this_hash = tm_leaf_hash(store_key, store_root);
        let app_hash = tm_inner_hash(&this_hash, &sibling_hash);

        let proof = ExistenceProof {
            key: store_key.to_vec(),
            value: store_root.to_vec(),
            leaf: tendermint_spec().leaf_spec,
            path: vec![InnerOp {
                hash: HashOp::Sha256 as i32,
                prefix: vec![0x01],
                suffix: sibling_hash,
            }],
        };
        (
            app_hash,
            CommitmentProof {
                proof: Some(commitment_proof::Proof::Exist(proof)),
            },
        )
    }

    fn proof_ops_bytes(ops: Vec<(&str, &[u8], &CommitmentProof)>) -> Vec<u8> {
        ProofOps {
            ops: ops
                .into_iter()
                .map(|(op_type, key, proof)| ProofOp {
                    r#type: op_type.to_string(),
                    key: key.to_vec(),
                    data: proof.encode_to_vec(),
                })
                .collect(),
        }
        .encode_to_vec()
    }

    #[test]
    fn chained_substore_and_multistore_proof() {
        let leaf_key = cross_chain_msg_key(&[0xaa; 20]);
        let value = b"cross chain message bytes".to_vec();
        let (substore_root, iavl) = iavl_proof(&leaf_key, &value, &[0x11; 32]);
        let (app_hash, simple) = simple_proof(CCM_SUBSTORE, &substore_root, &[0x22; 32]);

        let bytes = proof_ops_bytes(vec![
            (PROOF_OP_IAVL, &leaf_key, &iavl),
            (PROOF_OP_SIMPLE, CCM_SUBSTORE, &simple),
        ]);
        let ops = decode_proof_ops(&bytes).unwrap();
        verify_key_value(&ops, &app_hash, &[leaf_key.as_slice(), CCM_SUBSTORE], &value).unwrap();
    }

    #[test]
    fn mismatched_root_rejected() {
        let leaf_key = cross_chain_msg_key(&[0xaa; 20]);
        let value = b"payload".to_vec();
        let (substore_root, iavl) = iavl_proof(&leaf_key, &value, &[0x11; 32]);
        let (_, simple) = simple_proof(CCM_SUBSTORE, &substore_root, &[0x22; 32]);

        let bytes = proof_ops_bytes(vec![
            (PROOF_OP_IAVL, &leaf_key, &iavl),
            (PROOF_OP_SIMPLE, CCM_SUBSTORE, &simple),
        ]);
        let ops = decode_proof_ops(&bytes).unwrap();
        let err = verify_key_value(&ops, &[0xde; 32], &[leaf_key.as_slice(), CCM_SUBSTORE], &value)
            .unwrap_err();
        assert!(matches!(err, ContractError::VerifyProof { .. }));
    }

    #[test]
    fn mismatched_key_path_rejected() {
        let leaf_key = cross_chain_msg_key(&[0xaa; 20]);
        let value = b"payload".to_vec();
        let (substore_root, iavl) = iavl_proof(&leaf_key, &value, &[0x11; 32]);
        let (app_hash, simple) = simple_proof(CCM_SUBSTORE, &substore_root, &[0x22; 32]);

        let bytes = proof_ops_bytes(vec![
            (PROOF_OP_IAVL, &leaf_key, &iavl),
            (PROOF_OP_SIMPLE, CCM_SUBSTORE, &simple),
        ]);
        let ops = decode_proof_ops(&bytes).unwrap();
        let other_key = cross_chain_msg_key(&[0xbb; 20]);
        let err = verify_key_value(&ops, &app_hash, &[other_key.as_slice(), CCM_SUBSTORE], &value)
            .unwrap_err();
        assert!(matches!(err, ContractError::VerifyProof { .. }));
    }

    #[test]
    fn unknown_op_type_is_a_format_error() {
        let (_, iavl) = iavl_proof(b"key", b"value", &[0x11; 32]);
        let bytes = proof_ops_bytes(vec![("iavl:v", b"key", &iavl)]);
        let err = decode_proof_ops(&bytes).unwrap_err();
        assert!(matches!(err, ContractError::ProofFormat { .. }));
    }

    #[test]
    fn garbage_proof_bytes_are_a_format_error() {
        let err = decode_proof_ops(&[0xff, 0xfe, 0xfd]).unwrap_err();
        assert!(matches!(err, ContractError::ProofFormat { .. }));
    }

    #[test]
    fn legacy_capture_is_rejected_as_unknown_ops() {
        // a real pre-ics23 store proof: its op types are not in service
        let err = decode_proof_ops(&crossgate_test_utils::legacy_store_proof()).unwrap_err();
        assert!(matches!(err, ContractError::ProofFormat { .. }));
    }

    #[test]
    fn absence_run_with_no_args() {
        // membership proof run with zero args must fail cleanly
        let (_, iavl) = iavl_proof(b"key", b"value", &[0x11; 32]);
        let op = CommitmentOp {
            op_type: CommitmentOpType::Iavl,
            key: b"key".to_vec(),
            proof: iavl,
        };
        let err = op.run(&[]).unwrap_err();
        assert!(matches!(err, ContractError::VerifyProof { .. }));
    }
}
