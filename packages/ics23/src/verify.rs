//! Existence and non-existence verification against a commitment root.

use crossgate_proto::cosmos::ics23::v1::{
    commitment_proof, CommitmentProof, ExistenceProof, InnerOp, InnerSpec, NonExistenceProof,
    ProofSpec,
};

use crate::error::Ics23Error;
use crate::ops::{apply_inner, apply_leaf, check_inner_against_spec, check_leaf_against_spec};

/// Verifies that `proof` commits `(key, value)` under `root`.
pub fn verify_membership(
    spec: &ProofSpec,
    root: &[u8],
    proof: &CommitmentProof,
    key: &[u8],
    value: &[u8],
) -> Result<(), Ics23Error> {
    match &proof.proof {
        Some(commitment_proof::Proof::Exist(exist)) => {
            verify_existence(exist, spec, root, key, value)
        }
        Some(commitment_proof::Proof::Nonexist(_)) => Err(Ics23Error::ExpectedExistenceProof),
        Some(_) => Err(Ics23Error::BatchUnsupported),
        None => Err(Ics23Error::EmptyProof),
    }
}

/// Verifies that `proof` commits the absence of `key` under `root`.
pub fn verify_non_membership(
    spec: &ProofSpec,
    root: &[u8],
    proof: &CommitmentProof,
    key: &[u8],
) -> Result<(), Ics23Error> {
    match &proof.proof {
        Some(commitment_proof::Proof::Nonexist(nonexist)) => {
            verify_non_existence(nonexist, spec, root, key)
        }
        Some(commitment_proof::Proof::Exist(_)) => Err(Ics23Error::ExpectedNonExistenceProof),
        Some(_) => Err(Ics23Error::BatchUnsupported),
        None => Err(Ics23Error::EmptyProof),
    }
}

/// The root the proof's own embedded data hashes up to, regardless of any
/// externally supplied root. Used to chain substore roots into the
/// multistore proof.
pub fn calculate_root(proof: &CommitmentProof) -> Result<Vec<u8>, Ics23Error> {
    match &proof.proof {
        Some(commitment_proof::Proof::Exist(exist)) => calculate_existence_root(exist),
        Some(commitment_proof::Proof::Nonexist(nonexist)) => {
            if let Some(left) = &nonexist.left {
                calculate_existence_root(left)
            } else if let Some(right) = &nonexist.right {
                calculate_existence_root(right)
            } else {
                Err(Ics23Error::MissingFlankingProofs)
            }
        }
        Some(_) => Err(Ics23Error::BatchUnsupported),
        None => Err(Ics23Error::EmptyProof),
    }
}

/// Folds the leaf and the path into the committed root.
pub fn calculate_existence_root(proof: &ExistenceProof) -> Result<Vec<u8>, Ics23Error> {
    let leaf = proof.leaf.as_ref().ok_or(Ics23Error::MissingLeaf)?;
    let mut hash = apply_leaf(leaf, &proof.key, &proof.value)?;
    for step in &proof.path {
        hash = apply_inner(step, &hash)?;
    }
    Ok(hash)
}

fn verify_existence(
    proof: &ExistenceProof,
    spec: &ProofSpec,
    root: &[u8],
    key: &[u8],
    value: &[u8],
) -> Result<(), Ics23Error> {
    check_existence_spec(proof, spec)?;
    if proof.key != key {
        return Err(Ics23Error::KeyMismatch);
    }
    if proof.value != value {
        return Err(Ics23Error::ValueMismatch);
    }
    let calculated = calculate_existence_root(proof)?;
    if calculated != root {
        return Err(Ics23Error::RootMismatch);
    }
    Ok(())
}

fn check_existence_spec(proof: &ExistenceProof, spec: &ProofSpec) -> Result<(), Ics23Error> {
    let leaf = proof.leaf.as_ref().ok_or(Ics23Error::MissingLeaf)?;
    check_leaf_against_spec(leaf, spec)?;
    if spec.min_depth > 0 && (proof.path.len() as i32) < spec.min_depth {
        return Err(Ics23Error::spec_mismatch("proof path shorter than min depth"));
    }
    if spec.max_depth > 0 && (proof.path.len() as i32) > spec.max_depth {
        return Err(Ics23Error::spec_mismatch("proof path longer than max depth"));
    }
    for step in &proof.path {
        check_inner_against_spec(step, spec)?;
    }
    Ok(())
}

fn verify_non_existence(
    proof: &NonExistenceProof,
    spec: &ProofSpec,
    root: &[u8],
    key: &[u8],
) -> Result<(), Ics23Error> {
    let left = proof.left.as_ref();
    let right = proof.right.as_ref();
    if left.is_none() && right.is_none() {
        return Err(Ics23Error::MissingFlankingProofs);
    }

    if let Some(right) = right {
        if key >= right.key.as_slice() {
            return Err(Ics23Error::KeyNotBetween);
        }
        verify_existence(right, spec, root, &right.key, &right.value)?;
    }
    if let Some(left) = left {
        if key <= left.key.as_slice() {
            return Err(Ics23Error::KeyNotBetween);
        }
        verify_existence(left, spec, root, &left.key, &left.value)?;
    }

    let ispec = spec
        .inner_spec
        .as_ref()
        .ok_or(Ics23Error::IncompleteSpec("inner spec"))?;
    let adjacent = match (left, right) {
        (None, Some(right)) => is_left_most(ispec, &right.path),
        (Some(left), None) => is_right_most(ispec, &left.path),
        (Some(left), Some(right)) => is_left_neighbor(ispec, &left.path, &right.path),
        (None, None) => unreachable!(),
    };
    if !adjacent {
        return Err(Ics23Error::NotAdjacent);
    }
    Ok(())
}

/// True when every step of the path lies on the leftmost edge of the tree
/// (or the branches left of it hash an explicitly empty child).
fn is_left_most(spec: &InnerSpec, path: &[InnerOp]) -> bool {
    let Some((min_prefix, max_prefix, suffix)) = get_padding(spec, 0) else {
        return false;
    };
    path.iter().all(|step| {
        has_padding(step, min_prefix, max_prefix, suffix) || left_branches_are_empty(spec, step)
    })
}

/// Mirror image of [`is_left_most`].
fn is_right_most(spec: &InnerSpec, path: &[InnerOp]) -> bool {
    let last = spec.child_order.len() as i32 - 1;
    let Some((min_prefix, max_prefix, suffix)) = get_padding(spec, last) else {
        return false;
    };
    path.iter().all(|step| {
        has_padding(step, min_prefix, max_prefix, suffix) || right_branches_are_empty(spec, step)
    })
}

/// True when `left` and `right` are adjacent leaves: they share an upper
/// path, diverge at sibling branches, and hug the facing edges below the
/// divergence point.
fn is_left_neighbor(spec: &InnerSpec, left: &[InnerOp], right: &[InnerOp]) -> bool {
    let mut top_left = left.len();
    let mut top_right = right.len();
    while top_left > 0
        && top_right > 0
        && left[top_left - 1].prefix == right[top_right - 1].prefix
        && left[top_left - 1].suffix == right[top_right - 1].suffix
    {
        top_left -= 1;
        top_right -= 1;
    }
    if top_left == 0 || top_right == 0 {
        return false;
    }
    if !is_left_step(spec, &left[top_left - 1], &right[top_right - 1]) {
        return false;
    }
    is_right_most(spec, &left[..top_left - 1]) && is_left_most(spec, &right[..top_right - 1])
}

/// The branch on the right is exactly one to the right of the branch on
/// the left.
fn is_left_step(spec: &InnerSpec, left: &InnerOp, right: &InnerOp) -> bool {
    let (Some(left_idx), Some(right_idx)) =
        (order_from_padding(spec, left), order_from_padding(spec, right))
    else {
        return false;
    };
    right_idx == left_idx + 1
}

/// Padding sizes (`min_prefix`, `max_prefix`, `suffix`) for a child at the
/// given branch.
fn get_padding(spec: &InnerSpec, branch: i32) -> Option<(usize, usize, usize)> {
    let idx = get_position(&spec.child_order, branch)?;
    let child_size = usize::try_from(spec.child_size).ok()?;
    let prefix = idx * child_size;
    let min_prefix = prefix + usize::try_from(spec.min_prefix_length).ok()?;
    let max_prefix = prefix + usize::try_from(spec.max_prefix_length).ok()?;
    let suffix = (spec.child_order.len() - 1 - idx) * child_size;
    Some((min_prefix, max_prefix, suffix))
}

fn has_padding(op: &InnerOp, min_prefix: usize, max_prefix: usize, suffix: usize) -> bool {
    op.prefix.len() >= min_prefix && op.prefix.len() <= max_prefix && op.suffix.len() == suffix
}

/// Which branch this op's padding sizes place its child at.
fn order_from_padding(spec: &InnerSpec, op: &InnerOp) -> Option<i32> {
    (0..spec.child_order.len() as i32).find(|&branch| {
        get_padding(spec, branch)
            .map(|(min, max, suffix)| has_padding(op, min, max, suffix))
            .unwrap_or(false)
    })
}

/// Position of `branch` inside the child ordering.
fn get_position(order: &[i32], branch: i32) -> Option<usize> {
    if branch < 0 {
        return None;
    }
    order.iter().position(|&item| item == branch)
}

fn left_branches_are_empty(spec: &InnerSpec, op: &InnerOp) -> bool {
    let Some(idx) = order_from_padding(spec, op) else {
        return false;
    };
    let left_branches = idx as usize;
    if left_branches == 0 {
        return false;
    }
    let child_size = spec.child_size as usize;
    let Some(actual_prefix) = op.prefix.len().checked_sub(left_branches * child_size) else {
        return false;
    };
    (0..left_branches).all(|i| {
        let Some(pos) = get_position(&spec.child_order, i as i32) else {
            return false;
        };
        let from = actual_prefix + pos * child_size;
        op.prefix.get(from..from + child_size) == Some(spec.empty_child.as_slice())
    })
}

fn right_branches_are_empty(spec: &InnerSpec, op: &InnerOp) -> bool {
    let Some(idx) = order_from_padding(spec, op) else {
        return false;
    };
    let right_branches = spec.child_order.len() - 1 - idx as usize;
    if right_branches == 0 {
        return false;
    }
    let child_size = spec.child_size as usize;
    if op.suffix.len() != right_branches * child_size {
        return false;
    }
    (0..right_branches).all(|i| {
        let Some(pos) = get_position(&spec.child_order, (idx + 1) + i as i32) else {
            return false;
        };
        let from = pos * child_size;
        op.suffix.get(from..from + child_size) == Some(spec.empty_child.as_slice())
    })
}
