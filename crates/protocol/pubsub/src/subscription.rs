//! Subscriptions and their content-derived identity.

use alloy_primitives::{Address, B256, ChainId, keccak256};
use alloy_sol_types::{SolValue, sol};
use derive_more::{AsRef, Deref, Display, From};
use serde::{Deserialize, Serialize};

sol! {
    /// A destination receiver's interest in one event emitted by one source contract.
    ///
    /// Subscriptions carry no handle: two structurally identical subscriptions are the
    /// same subscription, see [`Subscription::id`].
    #[derive(Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    struct Subscription {
        /// Chain the event is emitted on.
        uint64 sourceChainId;
        /// Contract that emits the event.
        address sourceAddress;
        /// Receiver invoked on the destination chain.
        address callbackAddress;
        /// Event signature, expected as topic 0 of the log.
        bytes32 eventSig;
    }
}

impl Subscription {
    /// Creates a new [`Subscription`].
    pub const fn new(
        source_chain_id: ChainId,
        source_address: Address,
        callback_address: Address,
        event_sig: B256,
    ) -> Self {
        Self {
            sourceChainId: source_chain_id,
            sourceAddress: source_address,
            callbackAddress: callback_address,
            eventSig: event_sig,
        }
    }

    /// Returns the identity of the subscription: the keccak hash of its ABI encoding.
    pub fn id(&self) -> SubscriptionId {
        SubscriptionId(keccak256(self.abi_encode()))
    }
}

/// Content hash identifying a [`Subscription`].
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
pub struct SubscriptionId(B256);

impl SubscriptionId {
    /// Returns the underlying hash.
    pub const fn into_inner(self) -> B256 {
        self.0
    }
}
