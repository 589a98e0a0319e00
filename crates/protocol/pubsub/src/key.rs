//! The publish key: identity of one event delivered to one subscriber.

use crate::SubscriptionId;
use alloy_primitives::{B256, Bytes, U256, keccak256};
use alloy_sol_types::SolValue;
use derive_more::{AsRef, Deref, Display, From};
use serde::{Deserialize, Serialize};

/// Unique identity of the obligation to deliver one source-chain log to one subscription.
///
/// Computed as `keccak256(abi.encode(txSlot, txIndexEncoded, logIndex, subscriptionId))`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    From,
    AsRef,
    Deref,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct PublishKey(B256);

impl PublishKey {
    /// Derives the key of the log at `log_index` in the transaction at `tx_index_encoded` of
    /// the block at `tx_slot`, delivered to `subscription_id`.
    pub fn derive(
        tx_slot: u64,
        tx_index_encoded: &Bytes,
        log_index: u64,
        subscription_id: SubscriptionId,
    ) -> Self {
        let preimage = (
            tx_slot,
            tx_index_encoded.clone(),
            U256::from(log_index),
            subscription_id.into_inner(),
        )
            .abi_encode_params();
        Self(keccak256(preimage))
    }

    /// Returns the underlying hash.
    pub const fn into_inner(self) -> B256 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::bytes;
    use rstest::rstest;

    fn id(byte: u8) -> SubscriptionId {
        SubscriptionId::from(B256::repeat_byte(byte))
    }

    #[test]
    fn test_derive_is_deterministic() {
        let a = PublishKey::derive(100, &bytes!("05"), 3, id(1));
        let b = PublishKey::derive(100, &bytes!("05"), 3, id(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_preimage_layout() {
        let key = PublishKey::derive(1, &bytes!("80"), 2, id(3));

        // head: slot, offset, log index, subscription id; tail: length + padded bytes.
        let mut preimage = Vec::new();
        preimage.extend_from_slice(&U256::from(1).to_be_bytes::<32>());
        preimage.extend_from_slice(&U256::from(128).to_be_bytes::<32>());
        preimage.extend_from_slice(&U256::from(2).to_be_bytes::<32>());
        preimage.extend_from_slice(B256::repeat_byte(3).as_slice());
        preimage.extend_from_slice(&U256::from(1).to_be_bytes::<32>());
        let mut tail = [0u8; 32];
        tail[0] = 0x80;
        preimage.extend_from_slice(&tail);

        assert_eq!(key.into_inner(), keccak256(preimage));
    }

    #[rstest]
    #[case::slot(PublishKey::derive(2, &bytes!("05"), 3, id(1)))]
    #[case::tx_index(PublishKey::derive(1, &bytes!("06"), 3, id(1)))]
    #[case::log_index(PublishKey::derive(1, &bytes!("05"), 4, id(1)))]
    #[case::subscription(PublishKey::derive(1, &bytes!("05"), 3, id(2)))]
    fn test_distinct_inputs_yield_distinct_keys(#[case] other: PublishKey) {
        let base = PublishKey::derive(1, &bytes!("05"), 3, id(1));
        assert_ne!(base, other);
    }
}
