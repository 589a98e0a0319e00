//! Notification emitted for every acknowledged delivery.

use crate::{Subscription, SubscriptionId};
use alloy_primitives::{Address, ChainId};
use serde::{Deserialize, Serialize};

/// Emitted once a receiver has acknowledged an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publish {
    /// Identity of the subscription the event was delivered to.
    pub subscription_id: SubscriptionId,
    /// Chain the event was emitted on.
    pub source_chain_id: ChainId,
    /// Contract that emitted the event.
    pub source_address: Address,
    /// Receiver that acknowledged the event.
    pub callback_address: Address,
    /// Whether the receiver acknowledged the event. Only acknowledged deliveries are
    /// ever notified, so this is always `true` for notifications produced by the relay.
    pub success: bool,
}

impl Publish {
    /// Builds the notification of an acknowledged delivery to `subscription`.
    pub const fn delivered(subscription_id: SubscriptionId, subscription: &Subscription) -> Self {
        Self {
            subscription_id,
            source_chain_id: subscription.sourceChainId,
            source_address: subscription.sourceAddress,
            callback_address: subscription.callbackAddress,
            success: true,
        }
    }
}
