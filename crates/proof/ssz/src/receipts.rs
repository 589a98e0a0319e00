//! Location of an execution receipts root relative to a trusted beacon header.

use crate::{
    ForkSchedule, SszError, concat_gindex, gindex_depth, is_valid_merkle_branch,
    restore_merkle_root,
};
use alloy_primitives::B256;

/// Number of block roots kept in `state.block_roots` and per historical batch.
pub const SLOTS_PER_HISTORICAL_ROOT: u64 = 8192;

/// `BeaconBlockHeader.state_root`.
const STATE_ROOT_GINDEX: u64 = 11;
/// `BeaconBlock.body` (`BeaconBlockHeader.body_root`).
const BODY_ROOT_GINDEX: u64 = 12;
/// `BeaconBlockHeader.slot`, relative to the `(slot, proposer_index, parent_root,
/// state_root)` node at gindex 2 of the header.
pub(crate) const HEADER_SLOT_IN_LEFT_HALF: u64 = 4;

/// Number of trailing branch nodes proving the slot of the proven block: the
/// `proposer_index` leaf and the `(parent_root, state_root)` node.
pub const SLOT_BRANCH_LEN: usize = 2;

const BODY_DEPTH: u32 = 4;
const BODY_EXECUTION_PAYLOAD_INDEX: u64 = 9;
const PAYLOAD_RECEIPTS_ROOT_INDEX: u64 = 3;

const STATE_BLOCK_ROOTS_INDEX: u64 = 5;
const STATE_HISTORICAL_ROOTS_INDEX: u64 = 7;
const STATE_HISTORICAL_SUMMARIES_INDEX: u64 = 27;

const BLOCK_ROOTS_DEPTH: u32 = 13;
const HISTORICAL_LIST_DEPTH: u32 = 24;

const fn field(depth: u32, index: u64) -> u64 {
    (1 << depth) | index
}

/// Generalized index of the receipts root relative to the root of the block at `tx_slot`.
pub(crate) const fn block_to_receipts_gindex(tx_slot: u64, forks: &ForkSchedule) -> u64 {
    concat_gindex(
        concat_gindex(BODY_ROOT_GINDEX, field(BODY_DEPTH, BODY_EXECUTION_PAYLOAD_INDEX)),
        field(forks.payload_depth(tx_slot), PAYLOAD_RECEIPTS_ROOT_INDEX),
    )
}

/// SSZ leaf of a `uint64` slot.
pub(crate) fn slot_leaf(slot: u64) -> B256 {
    let mut leaf = B256::ZERO;
    leaf.0[..8].copy_from_slice(&slot.to_le_bytes());
    leaf
}

/// Returns the generalized index of the receipts root of the block at `tx_slot`, relative
/// to the root of the beacon block header at `source_slot`.
pub const fn receipts_root_gindex(
    source_slot: u64,
    tx_slot: u64,
    forks: &ForkSchedule,
) -> Result<u64, SszError> {
    let block_to_receipts = block_to_receipts_gindex(tx_slot, forks);

    if tx_slot == source_slot {
        return Ok(block_to_receipts);
    }
    if tx_slot > source_slot {
        return Err(SszError::InvalidTargetSlot { source_slot, tx_slot });
    }

    let state_depth = forks.state_depth(source_slot);
    let slot_in_batch = field(BLOCK_ROOTS_DEPTH, tx_slot % SLOTS_PER_HISTORICAL_ROOT);

    let block_root = if source_slot - tx_slot <= SLOTS_PER_HISTORICAL_ROOT {
        let block_roots =
            concat_gindex(STATE_ROOT_GINDEX, field(state_depth, STATE_BLOCK_ROOTS_INDEX));
        concat_gindex(block_roots, slot_in_batch)
    } else {
        let (list_field, list_index) = if forks.is_capella(tx_slot) {
            (
                STATE_HISTORICAL_SUMMARIES_INDEX,
                (tx_slot - forks.capella_slot) / SLOTS_PER_HISTORICAL_ROOT,
            )
        } else {
            (STATE_HISTORICAL_ROOTS_INDEX, tx_slot / SLOTS_PER_HISTORICAL_ROOT)
        };
        let list = concat_gindex(STATE_ROOT_GINDEX, field(state_depth, list_field));
        // Lists mix in their length: contents are the left child.
        let element = concat_gindex(list * 2, field(HISTORICAL_LIST_DEPTH, list_index));
        // `HistoricalBatch.block_roots` / `HistoricalSummary.block_summary_root`.
        concat_gindex(element * 2, slot_in_batch)
    };

    Ok(concat_gindex(block_root, block_to_receipts))
}

/// Verifies that `receipts_root` is the receipts root of the block at `tx_slot`, as
/// committed to by the beacon block header at `source_slot` with root `header_root`.
///
/// When `tx_slot` precedes `source_slot`, `branch` is the branch at
/// [`receipts_root_gindex`] followed by [`SLOT_BRANCH_LEN`] nodes proving that the header
/// of the proven block carries `tx_slot`. A skipped slot repeats the previous block root
/// in `state.block_roots`, so the position alone does not fix the slot.
pub fn verify_receipts_root(
    receipts_root: B256,
    branch: &[B256],
    header_root: B256,
    source_slot: u64,
    tx_slot: u64,
    forks: &ForkSchedule,
) -> Result<(), SszError> {
    let gindex = receipts_root_gindex(source_slot, tx_slot, forks)?;
    if tx_slot == source_slot {
        return is_valid_merkle_branch(receipts_root, gindex, branch, header_root);
    }

    let depth = gindex_depth(gindex) as usize;
    if branch.len() != depth + SLOT_BRANCH_LEN {
        return Err(SszError::BranchLength {
            expected: depth + SLOT_BRANCH_LEN,
            actual: branch.len(),
        });
    }
    let (receipts_branch, slot_branch) = branch.split_at(depth);
    is_valid_merkle_branch(receipts_root, gindex, receipts_branch, header_root)?;

    // The receipts path enters the block root from the right half, hashing in the left
    // half that holds the slot.
    let block_depth = gindex_depth(block_to_receipts_gindex(tx_slot, forks)) as usize;
    let left_half = receipts_branch[block_depth - 1];
    if restore_merkle_root(slot_leaf(tx_slot), HEADER_SLOT_IN_LEFT_HALF, slot_branch)? != left_half
    {
        return Err(SszError::SlotMismatch { tx_slot });
    }
    Ok(())
}
