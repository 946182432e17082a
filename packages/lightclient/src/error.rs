use crossgate_amino::AminoError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum LightClientError {
    #[error("amino decode error: {0}")]
    Amino(#[from] AminoError),
    #[error("unknown public key prefix {0:08x}")]
    UnknownPubKeyPrefix(u32),
    #[error("public key has {actual} bytes, expected {expected}")]
    PubKeyLength { expected: usize, actual: usize },
    #[error("the supplied validator set does not hash to the header's validators_hash")]
    ValidatorSetMismatch,
    #[error("the supplied validator set does not hash to the trusted next_validators_hash")]
    NextValidatorsMismatch,
    #[error("commit is for height {commit}, header is at height {header}")]
    CommitHeightMismatch { commit: i64, header: i64 },
    #[error("commit block id does not match the header hash")]
    CommitHashMismatch,
    #[error("invalid commit: {0}")]
    InvalidCommit(String),
    #[error("commit has {precommits} precommit slots for {validators} validators")]
    PrecommitCountMismatch { validators: usize, precommits: usize },
    #[error("invalid signature on precommit {index}")]
    InvalidSignature { index: usize },
    #[error("tallied voting power {tallied} is not more than 2/3 of {total}")]
    InsufficientVotingPower { tallied: i64, total: i64 },
    #[error("validator voting power overflows")]
    VotingPowerOverflow,
}

impl LightClientError {
    pub fn invalid_commit(msg: impl Into<String>) -> Self {
        LightClientError::InvalidCommit(msg.into())
    }
}
