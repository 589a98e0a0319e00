//! Errors for SSZ branch verification.

use alloy_primitives::B256;
use thiserror::Error;

/// Errors raised while verifying an SSZ Merkle branch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SszError {
    /// The transaction slot is after the slot of the trusted header.
    #[error("transaction slot {tx_slot} is after source slot {source_slot}")]
    InvalidTargetSlot {
        /// Slot of the trusted header.
        source_slot: u64,
        /// Claimed slot of the transaction.
        tx_slot: u64,
    },
    /// Generalized indices start at 1.
    #[error("invalid generalized index {0}")]
    InvalidGeneralizedIndex(u64),
    /// The branch length does not match the depth of the generalized index.
    #[error("branch has {actual} nodes, expected {expected}")]
    BranchLength {
        /// Depth of the generalized index.
        expected: usize,
        /// Number of nodes supplied.
        actual: usize,
    },
    /// The branch does not lead to the trusted root.
    #[error("restored root {restored} does not match trusted root {expected}")]
    RootMismatch {
        /// The trusted root.
        expected: B256,
        /// The root restored from the leaf and branch.
        restored: B256,
    },
    /// The header of the proven block is not at the claimed slot.
    #[error("proven block is not at slot {tx_slot}")]
    SlotMismatch {
        /// Claimed slot of the transaction.
        tx_slot: u64,
    },
}
