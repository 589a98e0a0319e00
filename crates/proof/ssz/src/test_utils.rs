//! Builders for receipts root branches.

use crate::{
    ForkSchedule, SszError, gindex_depth,
    receipts::{HEADER_SLOT_IN_LEFT_HALF, block_to_receipts_gindex, slot_leaf},
    receipts_root_gindex, restore_merkle_root,
};
use alloy_primitives::B256;

/// Builds a branch proving `receipts_root` for the block at `tx_slot`, and the root of the
/// header at `source_slot` it leads to.
pub fn receipts_root_proof(
    receipts_root: B256,
    source_slot: u64,
    tx_slot: u64,
    forks: &ForkSchedule,
) -> Result<(Vec<B256>, B256), SszError> {
    build(receipts_root, source_slot, tx_slot, forks, false)
}

/// Like [`receipts_root_proof`], but the slot after `tx_slot` is skipped: the state of the
/// source header holds the root of the block at `tx_slot` at both positions.
///
/// `tx_slot` must be even and earlier than `source_slot - 1`.
pub fn skipped_slot_proof(
    receipts_root: B256,
    source_slot: u64,
    tx_slot: u64,
    forks: &ForkSchedule,
) -> Result<(Vec<B256>, B256), SszError> {
    build(receipts_root, source_slot, tx_slot, forks, true)
}

fn build(
    receipts_root: B256,
    source_slot: u64,
    tx_slot: u64,
    forks: &ForkSchedule,
    skip_next_slot: bool,
) -> Result<(Vec<B256>, B256), SszError> {
    let gindex = receipts_root_gindex(source_slot, tx_slot, forks)?;
    let mut branch = (0..gindex_depth(gindex))
        .map(|level| B256::with_last_byte(level as u8 + 1))
        .collect::<Vec<_>>();
    if tx_slot == source_slot {
        let header_root = restore_merkle_root(receipts_root, gindex, &branch)?;
        return Ok((branch, header_root));
    }

    let slot_branch = [B256::repeat_byte(0xa1), B256::repeat_byte(0xa2)];
    let block_to_receipts = block_to_receipts_gindex(tx_slot, forks);
    let block_depth = gindex_depth(block_to_receipts) as usize;
    branch[block_depth - 1] =
        restore_merkle_root(slot_leaf(tx_slot), HEADER_SLOT_IN_LEFT_HALF, &slot_branch)?;
    if skip_next_slot {
        // Sibling of the block root in `block_roots`.
        branch[block_depth] =
            restore_merkle_root(receipts_root, block_to_receipts, &branch[..block_depth])?;
    }

    let header_root = restore_merkle_root(receipts_root, gindex, &branch)?;
    branch.extend(slot_branch);
    Ok((branch, header_root))
}
