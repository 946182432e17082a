use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Ics23Error {
    #[error("proof is empty")]
    EmptyProof,
    #[error("expected an existence proof")]
    ExpectedExistenceProof,
    #[error("expected a non-existence proof")]
    ExpectedNonExistenceProof,
    #[error("batch and compressed proofs are not supported")]
    BatchUnsupported,
    #[error("existence proof needs a defined leaf op")]
    MissingLeaf,
    #[error("leaf op needs a key")]
    MissingKey,
    #[error("leaf op needs a value")]
    MissingValue,
    #[error("inner op needs a child value")]
    MissingChild,
    #[error("unsupported hash op {0}")]
    UnsupportedHashOp(i32),
    #[error("unsupported length op {0}")]
    UnsupportedLengthOp(i32),
    #[error("data is {actual} bytes, expected exactly {expected}")]
    WrongLengthData { expected: usize, actual: usize },
    #[error("proof does not match spec: {0}")]
    SpecMismatch(String),
    #[error("provided key does not match proof key")]
    KeyMismatch,
    #[error("provided value does not match proof value")]
    ValueMismatch,
    #[error("calculated root does not match provided root")]
    RootMismatch,
    #[error("non-existence proof has neither left nor right existence proof")]
    MissingFlankingProofs,
    #[error("key is not between the flanking proofs")]
    KeyNotBetween,
    #[error("flanking proofs are not adjacent in the tree")]
    NotAdjacent,
    #[error("spec is missing its {0}")]
    IncompleteSpec(&'static str),
}

impl Ics23Error {
    pub fn spec_mismatch(msg: impl Into<String>) -> Self {
        Ics23Error::SpecMismatch(msg.into())
    }
}
