//! Commit verification: the accept/reject decision for a synced header.

use crate::error::LightClientError;
use crate::types::Header;
use crate::validator::ValidatorSet;
use crate::vote::Commit;

/// Verifies that `commit` is a valid commit for `header`, signed by
/// `valset` with strictly more than 2/3 of its voting power.
///
/// `trusted_next_hash` is the `next_validators_hash` of the most recent
/// trusted header; passing it ties the supplied set to the forward trust
/// chain. Checks run in order and short-circuit:
///
/// 1. the set hashes to the header's `validators_hash`,
/// 2. the set hashes to the trusted `next_validators_hash` (if supplied),
/// 3. the commit is for the header's height,
/// 4. the commit's block id is the header's hash,
/// 5. the commit is structurally valid with one slot per validator,
/// 6. every present precommit carries a valid signature; votes for the
///    commit's block id tally toward the quorum.
pub fn verify_commit(
    trusted_next_hash: Option<&[u8]>,
    header: &Header,
    commit: &Commit,
    valset: &ValidatorSet,
    chain_id: &str,
) -> Result<(), LightClientError> {
    let valset_hash = valset.hash();
    if valset_hash != header.validators_hash.as_slice() {
        return Err(LightClientError::ValidatorSetMismatch);
    }
    if let Some(trusted) = trusted_next_hash {
        if valset_hash != trusted {
            return Err(LightClientError::NextValidatorsMismatch);
        }
    }
    if commit.height() != header.height {
        return Err(LightClientError::CommitHeightMismatch {
            commit: commit.height(),
            header: header.height,
        });
    }
    if commit.block_id.hash != header.hash() {
        return Err(LightClientError::CommitHashMismatch);
    }
    commit.validate_basic()?;
    if valset.len() != commit.precommits.len() {
        return Err(LightClientError::PrecommitCountMismatch {
            validators: valset.len(),
            precommits: commit.precommits.len(),
        });
    }

    let mut tallied: i64 = 0;
    for (index, precommit) in commit.precommits.iter().enumerate() {
        let Some(precommit) = precommit else {
            continue; // missing votes are fine, they just don't count
        };
        let Some(validator) = valset.get(index) else {
            return Err(LightClientError::PrecommitCountMismatch {
                validators: valset.len(),
                precommits: commit.precommits.len(),
            });
        };
        let sign_bytes = precommit.sign_bytes(chain_id);
        if !validator.pub_key.verify(&sign_bytes, &precommit.signature) {
            return Err(LightClientError::InvalidSignature { index });
        }
        // correctly signed votes for other blocks (or nil) don't tally
        if precommit.block_id == commit.block_id {
            tallied = tallied
                .checked_add(validator.voting_power)
                .ok_or(LightClientError::VotingPowerOverflow)?;
        }
    }

    let total = valset.total_power()?;
    if i128::from(tallied) * 3 > i128::from(total) * 2 {
        Ok(())
    } else {
        Err(LightClientError::InsufficientVotingPower { tallied, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pubkey::PubKey;
    use crate::types::{BlockId, PartSetHeader, Time};
    use crate::validator::Validator;
    use crate::vote::{Vote, PRECOMMIT_TYPE};
    use ed25519_dalek::Signer as _;

    const CHAIN_ID: &str = "test-chain-x";

    fn keys(n: u8) -> Vec<ed25519_dalek::SigningKey> {
        (1..=n)
            .map(|seed| ed25519_dalek::SigningKey::from_bytes(&[seed; 32]))
            .collect()
    }

    fn valset(keys: &[ed25519_dalek::SigningKey], powers: &[i64]) -> ValidatorSet {
        let validators = keys
            .iter()
            .zip(powers)
            .map(|(key, &power)| {
                let pub_key = PubKey::Ed25519(key.verifying_key().to_bytes());
                Validator {
                    address: pub_key.address().to_vec(),
                    pub_key,
                    voting_power: power,
                    proposer_priority: 0,
                }
            })
            .collect();
        ValidatorSet::new(validators)
    }

    fn header(height: i64, valset: &ValidatorSet) -> Header {
        Header {
            chain_id: CHAIN_ID.into(),
            height,
            time: Time {
                seconds: 1_570_000_000,
                nanos: 0,
            },
            validators_hash: valset.hash().to_vec(),
            next_validators_hash: valset.hash().to_vec(),
            app_hash: vec![0x42; 32],
            proposer_address: vec![0x01; 20],
            ..Default::default()
        }
    }

    fn block_id_for(header: &Header) -> BlockId {
        BlockId {
            hash: header.hash().to_vec(),
            parts: PartSetHeader {
                total: 1,
                hash: vec![0x33; 32],
            },
        }
    }

    /// Builds a commit where validator `i` votes iff `votes[i]` is Some;
    /// `Some(true)` votes for the block, `Some(false)` votes for another.
    fn commit_for(
        header: &Header,
        keys: &[ed25519_dalek::SigningKey],
        votes: &[Option<bool>],
    ) -> Commit {
        let block_id = block_id_for(header);
        let other_block_id = BlockId {
            hash: vec![0x55; 32],
            parts: block_id.parts.clone(),
        };
        let precommits = votes
            .iter()
            .enumerate()
            .map(|(index, choice)| {
                choice.map(|for_block| {
                    let mut vote = Vote {
                        vote_type: PRECOMMIT_TYPE,
                        height: header.height,
                        round: 0,
                        block_id: if for_block {
                            block_id.clone()
                        } else {
                            other_block_id.clone()
                        },
                        timestamp: Time {
                            seconds: 1_570_000_010,
                            nanos: index as i32,
                        },
                        validator_address: vec![0x07; 20],
                        validator_index: index as i64,
                        signature: vec![],
                    };
                    let sign_bytes = vote.sign_bytes(CHAIN_ID);
                    vote.signature = keys[index].sign(&sign_bytes).to_bytes().to_vec();
                    vote
                })
            })
            .collect();
        Commit {
            block_id,
            precommits,
        }
    }

    #[test]
    fn three_quarters_accepts() {
        let keys = keys(4);
        let set = valset(&keys, &[10, 10, 10, 10]);
        let header = header(7, &set);
        let commit = commit_for(&header, &keys, &[Some(true), Some(true), Some(true), None]);
        verify_commit(None, &header, &commit, &set, CHAIN_ID).unwrap();
    }

    #[test]
    fn exactly_two_thirds_rejects() {
        let keys = keys(3);
        let set = valset(&keys, &[1, 1, 1]);
        let header = header(7, &set);
        let commit = commit_for(&header, &keys, &[Some(true), Some(true), None]);
        let err = verify_commit(None, &header, &commit, &set, CHAIN_ID).unwrap_err();
        assert_eq!(
            err,
            LightClientError::InsufficientVotingPower {
                tallied: 2,
                total: 3
            }
        );
    }

    #[test]
    fn just_over_two_thirds_accepts() {
        let keys = keys(3);
        let set = valset(&keys, &[1, 1, 1]);
        let header = header(7, &set);
        let commit = commit_for(&header, &keys, &[Some(true), Some(true), Some(true)]);
        verify_commit(None, &header, &commit, &set, CHAIN_ID).unwrap();
    }

    #[test]
    fn votes_for_other_blocks_verify_but_do_not_tally() {
        let keys = keys(3);
        let set = valset(&keys, &[1, 1, 1]);
        let header = header(7, &set);
        // all three signatures are valid, but one voted for another block
        let commit = commit_for(&header, &keys, &[Some(true), Some(true), Some(false)]);
        let err = verify_commit(None, &header, &commit, &set, CHAIN_ID).unwrap_err();
        assert_eq!(
            err,
            LightClientError::InsufficientVotingPower {
                tallied: 2,
                total: 3
            }
        );
    }

    #[test]
    fn forged_signature_is_fatal() {
        let keys = keys(3);
        let set = valset(&keys, &[1, 1, 1]);
        let header = header(7, &set);
        let mut commit = commit_for(&header, &keys, &[Some(true), Some(true), Some(true)]);
        commit.precommits[1].as_mut().unwrap().signature[10] ^= 0x01;
        let err = verify_commit(None, &header, &commit, &set, CHAIN_ID).unwrap_err();
        assert_eq!(err, LightClientError::InvalidSignature { index: 1 });
    }

    #[test]
    fn wrong_validator_set_rejected() {
        let keys_a = keys(3);
        let set_a = valset(&keys_a, &[1, 1, 1]);
        let keys_b: Vec<_> = (10u8..13)
            .map(|seed| ed25519_dalek::SigningKey::from_bytes(&[seed; 32]))
            .collect();
        let set_b = valset(&keys_b, &[1, 1, 1]);

        let header = header(7, &set_a);
        let commit = commit_for(&header, &keys_a, &[Some(true), Some(true), Some(true)]);
        let err = verify_commit(None, &header, &commit, &set_b, CHAIN_ID).unwrap_err();
        assert_eq!(err, LightClientError::ValidatorSetMismatch);
    }

    #[test]
    fn trusted_next_hash_must_match() {
        let keys = keys(3);
        let set = valset(&keys, &[1, 1, 1]);
        let header = header(7, &set);
        let commit = commit_for(&header, &keys, &[Some(true), Some(true), Some(true)]);
        let err = verify_commit(Some(&[0xde; 32]), &header, &commit, &set, CHAIN_ID).unwrap_err();
        assert_eq!(err, LightClientError::NextValidatorsMismatch);
    }

    #[test]
    fn commit_height_must_match_header() {
        let keys = keys(3);
        let set = valset(&keys, &[1, 1, 1]);
        let header_a = header(7, &set);
        let header_b = header(8, &set);
        let commit = commit_for(&header_a, &keys, &[Some(true), Some(true), Some(true)]);
        let err = verify_commit(None, &header_b, &commit, &set, CHAIN_ID).unwrap_err();
        assert_eq!(
            err,
            LightClientError::CommitHeightMismatch {
                commit: 7,
                header: 8
            }
        );
    }

    #[test]
    fn precommit_slot_count_must_match_set() {
        let keys = keys(3);
        let set = valset(&keys, &[1, 1, 1]);
        let header = header(7, &set);
        let mut commit = commit_for(&header, &keys, &[Some(true), Some(true), Some(true)]);
        commit.precommits.pop();
        let err = verify_commit(None, &header, &commit, &set, CHAIN_ID).unwrap_err();
        assert_eq!(
            err,
            LightClientError::PrecommitCountMismatch {
                validators: 3,
                precommits: 2
            }
        );
    }

    #[test]
    fn wrong_chain_id_breaks_signatures() {
        let keys = keys(3);
        let set = valset(&keys, &[1, 1, 1]);
        let header = header(7, &set);
        let commit = commit_for(&header, &keys, &[Some(true), Some(true), Some(true)]);
        let err = verify_commit(None, &header, &commit, &set, "another-chain").unwrap_err();
        assert_eq!(err, LightClientError::InvalidSignature { index: 0 });
    }
}
