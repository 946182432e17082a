//! ICS-23 commitment proof verification.
//!
//! Implements existence and non-existence verification for the two proof
//! formats a Cosmos-SDK multistore emits: IAVL substore proofs and
//! Tendermint simple-Merkle multistore proofs. Batch and compressed
//! proofs are recognized on the wire but rejected.

pub mod error;
pub mod ops;
pub mod spec;
pub mod verify;

pub use crossgate_proto::cosmos::ics23::v1::{
    commitment_proof, CommitmentProof, ExistenceProof, HashOp, InnerOp, InnerSpec, LeafOp,
    LengthOp, NonExistenceProof, ProofSpec,
};
pub use error::Ics23Error;
pub use spec::{iavl_spec, tendermint_spec};
pub use verify::{
    calculate_existence_root, calculate_root, verify_membership, verify_non_membership,
};
