//! References to source-chain events and the proof material backing them.

use crate::{PublishKey, SubscriptionId};
use alloy_primitives::{B256, Bytes};
use serde::{Deserialize, Serialize};

/// Locates one log within one transaction within one block of the source chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRef {
    /// Slot of the trusted header the proof is anchored to.
    pub source_slot: u64,
    /// Slot of the block that contains the transaction.
    pub tx_slot: u64,
    /// RLP encoding of the transaction index within its block. This is the key of the
    /// receipt in the receipts trie.
    pub tx_index_encoded: Bytes,
    /// Index of the log within the transaction receipt.
    pub log_index: u64,
}

impl EventRef {
    /// Returns the [`PublishKey`] of this event for the given subscription.
    pub fn publish_key(&self, subscription_id: SubscriptionId) -> PublishKey {
        PublishKey::derive(self.tx_slot, &self.tx_index_encoded, self.log_index, subscription_id)
    }
}

/// Caller-supplied proofs that an event was included in a finalized block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofMaterial {
    /// Claimed receipts root of the block at the transaction slot.
    pub receipts_root: B256,
    /// SSZ branch from the receipts root up to the trusted header root, followed by the
    /// slot proof of the block when it precedes the trusted header.
    pub receipts_root_proof: Vec<B256>,
    /// RLP-encoded receipts trie nodes, from the root down to the receipt.
    pub receipt_proof: Vec<Bytes>,
}
