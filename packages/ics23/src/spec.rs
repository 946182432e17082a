//! The two proof specifications a Cosmos-SDK multistore emits.

use crossgate_proto::cosmos::ics23::v1::{HashOp, InnerSpec, LeafOp, LengthOp, ProofSpec};

/// Spec for IAVL substore proofs: SHA-256 throughout, proto-varint length
/// prefixes, 33-byte children (1-byte length prefix + 32-byte hash).
pub fn iavl_spec() -> ProofSpec {
    ProofSpec {
        leaf_spec: Some(LeafOp {
            hash: HashOp::Sha256 as i32,
            prehash_key: HashOp::NoHash as i32,
            prehash_value: HashOp::Sha256 as i32,
            length: LengthOp::VarProto as i32,
            prefix: vec![0x00],
        }),
        inner_spec: Some(InnerSpec {
            child_order: vec![0, 1],
            child_size: 33,
            min_prefix_length: 4,
            max_prefix_length: 12,
            empty_child: vec![],
            hash: HashOp::Sha256 as i32,
        }),
        max_depth: 0,
        min_depth: 0,
    }
}

/// Spec for Tendermint simple-Merkle proofs (the multistore tree).
pub fn tendermint_spec() -> ProofSpec {
    ProofSpec {
        leaf_spec: Some(LeafOp {
            hash: HashOp::Sha256 as i32,
            prehash_key: HashOp::NoHash as i32,
            prehash_value: HashOp::Sha256 as i32,
            length: LengthOp::VarProto as i32,
            prefix: vec![0x00],
        }),
        inner_spec: Some(InnerSpec {
            child_order: vec![0, 1],
            child_size: 32,
            min_prefix_length: 1,
            max_prefix_length: 1,
            empty_child: vec![],
            hash: HashOp::Sha256 as i32,
        }),
        max_depth: 0,
        min_depth: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specs_differ_only_in_inner_shape() {
        let iavl = iavl_spec();
        let tm = tendermint_spec();
        assert_eq!(iavl.leaf_spec, tm.leaf_spec);
        assert_ne!(iavl.inner_spec, tm.inner_spec);
        assert_eq!(iavl.inner_spec.unwrap().child_size, 33);
        assert_eq!(tm.inner_spec.unwrap().child_size, 32);
    }
}
