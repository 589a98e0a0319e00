//! ABI of the receiver entry point and its acknowledgement.
//!
//! A receiver proves it implements the entry point by returning the entry point's own
//! selector, ABI-encoded as `bytes4`. A receiver that merely accepts arbitrary calls
//! (for example a permissive fallback) will not produce this value.

use crate::{PublishKey, Subscription, SubscriptionId};
use alloy_primitives::{B256, Bytes, FixedBytes};
use alloy_sol_types::{SolCall, sol};

sol! {
    /// Entry point a destination receiver implements to accept published events.
    #[sol(all_derives)]
    interface ISubscriptionReceiver {
        /// Handles one verified event. Must return the selector of this function.
        function handlePublish(
            bytes32 subscriptionId,
            uint64 sourceChainId,
            address sourceAddress,
            uint64 slot,
            bytes32 publishKey,
            bytes32[] eventTopics,
            bytes eventdata
        ) external returns (bytes4);
    }
}

/// Decoded call to [`ISubscriptionReceiver::handlePublishCall`].
pub type PublishCall = ISubscriptionReceiver::handlePublishCall;

/// Selector of `handlePublish`, echoed back by receivers as acknowledgement.
pub const HANDLE_PUBLISH_SELECTOR: [u8; 4] = <PublishCall as SolCall>::SELECTOR;

/// ABI-encodes the receiver call for one verified event.
pub fn encode_publish_call(
    subscription_id: SubscriptionId,
    subscription: &Subscription,
    tx_slot: u64,
    publish_key: PublishKey,
    topics: &[B256],
    data: &Bytes,
) -> Bytes {
    PublishCall {
        subscriptionId: subscription_id.into_inner(),
        sourceChainId: subscription.sourceChainId,
        sourceAddress: subscription.sourceAddress,
        slot: tx_slot,
        publishKey: publish_key.into_inner(),
        eventTopics: topics.to_vec(),
        eventdata: data.clone(),
    }
    .abi_encode()
    .into()
}

/// Returns the acknowledgement a genuine receiver returns: the selector as ABI `bytes4`.
pub fn encode_ack() -> Bytes {
    let mut word = [0u8; 32];
    word[..4].copy_from_slice(&HANDLE_PUBLISH_SELECTOR);
    Bytes::copy_from_slice(&word)
}

/// Decodes a `bytes4` return value.
///
/// Returns [`None`] unless `output` is exactly one word with zero padding.
pub fn decode_ack(output: &[u8]) -> Option<FixedBytes<4>> {
    if output.len() != 32 || output[4..].iter().any(|byte| *byte != 0) {
        return None;
    }
    Some(FixedBytes::from_slice(&output[..4]))
}
