//! Generalized indices and SHA-256 Merkle branches.

use crate::SszError;
use alloy_primitives::B256;
use sha2::{Digest, Sha256};

/// Returns the depth of a generalized index, i.e. `floor(log2(gindex))`.
///
/// `gindex` must be non-zero.
pub const fn gindex_depth(gindex: u64) -> u32 {
    63 - gindex.leading_zeros()
}

/// Concatenates two generalized indices: `inner` is interpreted relative to the node
/// addressed by `outer`.
pub const fn concat_gindex(outer: u64, inner: u64) -> u64 {
    let depth = gindex_depth(inner);
    (outer << depth) | (inner ^ (1 << depth))
}

/// Hashes two sibling nodes into their parent.
pub fn hash_pair(left: &B256, right: &B256) -> B256 {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    B256::from_slice(&hasher.finalize())
}

/// Restores the root committed to by `leaf` at `gindex`, given the sibling nodes from the
/// leaf upwards.
pub fn restore_merkle_root(leaf: B256, gindex: u64, branch: &[B256]) -> Result<B256, SszError> {
    if gindex == 0 {
        return Err(SszError::InvalidGeneralizedIndex(gindex));
    }
    let depth = gindex_depth(gindex) as usize;
    if branch.len() != depth {
        return Err(SszError::BranchLength { expected: depth, actual: branch.len() });
    }

    let mut node = leaf;
    let mut index = gindex;
    for sibling in branch {
        node = if index & 1 == 1 { hash_pair(sibling, &node) } else { hash_pair(&node, sibling) };
        index >>= 1;
    }
    Ok(node)
}

/// Checks that `branch` proves `leaf` at `gindex` under `root`.
pub fn is_valid_merkle_branch(
    leaf: B256,
    gindex: u64,
    branch: &[B256],
    root: B256,
) -> Result<(), SszError> {
    let restored = restore_merkle_root(leaf, gindex, branch)?;
    if restored != root {
        return Err(SszError::RootMismatch { expected: root, restored });
    }
    Ok(())
}
