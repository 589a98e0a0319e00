//! Invocation of receivers and the acknowledgement protocol.
//!
//! A delivery counts as acknowledged only if the receiver call succeeds and returns the
//! `handlePublish` selector. Anything else aborts the delivery without recording it. A
//! recorded failure could be forced by starving the receiver call of resources while the
//! caller keeps enough to commit, permanently burning an event that would otherwise be
//! delivered; aborting leaves the event retryable with a fresh budget.

mod receiver;
pub use receiver::{CallOutcome, ReceiverRegistry, SubscriptionReceiver};

mod adapter;
pub use adapter::{PublishHandler, PublishHandlerAdapter};

use crate::{DeliveryTx, DispatchError};
use alloy_primitives::LogData;
use relay_pubsub::{
    HANDLE_PUBLISH_SELECTOR, Publish, PublishKey, Subscription, SubscriptionId, decode_ack,
    encode_publish_call,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// A verified event, ready to be handed to its receiver.
#[derive(Debug, Clone, Copy)]
pub struct DispatchRequest<'a> {
    /// Identity of the subscription.
    pub subscription_id: SubscriptionId,
    /// The subscription.
    pub subscription: &'a Subscription,
    /// Slot of the block that emitted the event.
    pub tx_slot: u64,
    /// Identity of the delivery.
    pub publish_key: PublishKey,
    /// Topics and data of the event.
    pub log: &'a LogData,
}

/// Calls receivers and interprets their acknowledgement.
#[derive(Debug, Clone)]
pub struct CallbackDispatcher {
    receivers: Arc<ReceiverRegistry>,
}

impl CallbackDispatcher {
    /// Creates a dispatcher over `receivers`.
    pub const fn new(receivers: Arc<ReceiverRegistry>) -> Self {
        Self { receivers }
    }

    /// Returns the receiver registry.
    pub const fn receivers(&self) -> &Arc<ReceiverRegistry> {
        &self.receivers
    }

    /// Calls the receiver of `request` with `gas_limit`.
    ///
    /// On acknowledgement, stages the success and its notification in `tx` and returns the
    /// notification. On failure nothing is staged.
    pub fn dispatch(
        &self,
        tx: &mut DeliveryTx,
        request: DispatchRequest<'_>,
        gas_limit: u64,
    ) -> Result<Publish, DispatchError> {
        let DispatchRequest { subscription_id, subscription, tx_slot, publish_key, log } = request;
        let callback = subscription.callbackAddress;

        let calldata = encode_publish_call(
            subscription_id,
            subscription,
            tx_slot,
            publish_key,
            log.topics(),
            &log.data,
        );
        debug!(
            target: "relay::dispatch",
            %publish_key,
            %callback,
            gas_limit,
            "Calling receiver"
        );
        let outcome = self.receivers.call(&callback, &calldata, gas_limit);

        if !outcome.success {
            warn!(
                target: "relay::dispatch",
                %publish_key,
                %callback,
                output = %outcome.output,
                "Receiver call failed"
            );
            return Err(DispatchError::CallFailed);
        }
        if decode_ack(&outcome.output).is_none_or(|magic| magic.0 != HANDLE_PUBLISH_SELECTOR) {
            warn!(
                target: "relay::dispatch",
                %publish_key,
                %callback,
                output = %outcome.output,
                "Receiver did not acknowledge"
            );
            return Err(DispatchError::InvalidSelector);
        }

        let publish = Publish::delivered(subscription_id, subscription);
        tx.record_success(publish_key);
        tx.notify(publish);
        Ok(publish)
    }
}
