//! Receiver-side adapter for typed publish handlers.

use super::{CallOutcome, SubscriptionReceiver};
use alloy_primitives::Bytes;
use alloy_sol_types::SolCall;
use derive_more::Constructor;
use relay_pubsub::{HANDLE_PUBLISH_SELECTOR, PublishCall, encode_ack};
use std::fmt::{Debug, Display};
use tracing::debug;

/// Business logic of a receiver.
pub trait PublishHandler: Debug + Send + Sync {
    /// The error returned when the handler rejects an event.
    type Error: Display;

    /// Handles one verified event.
    fn handle_publish(&self, call: &PublishCall) -> Result<(), Self::Error>;
}

/// Exposes a [`PublishHandler`] as a [`SubscriptionReceiver`].
///
/// Decodes the call, rejects foreign selectors and echoes the acknowledgement once the
/// handler succeeds. Handler errors become reverts carrying the error message.
#[derive(Debug, Constructor)]
pub struct PublishHandlerAdapter<H> {
    handler: H,
}

impl<H> PublishHandlerAdapter<H> {
    /// Returns the wrapped handler.
    pub const fn handler(&self) -> &H {
        &self.handler
    }
}

impl<H: PublishHandler> SubscriptionReceiver for PublishHandlerAdapter<H> {
    fn call(&self, calldata: &Bytes, _gas_limit: u64) -> CallOutcome {
        if calldata.get(..4) != Some(HANDLE_PUBLISH_SELECTOR.as_slice()) {
            return CallOutcome::revert(Bytes::new());
        }
        let call = match PublishCall::abi_decode(calldata) {
            Ok(call) => call,
            Err(err) => {
                debug!(target: "relay::dispatch", %err, "Malformed publish call");
                return CallOutcome::revert(Bytes::new());
            }
        };

        match self.handler.handle_publish(&call) {
            Ok(()) => CallOutcome::success(encode_ack()),
            Err(err) => CallOutcome::revert(Bytes::from(err.to_string().into_bytes())),
        }
    }
}
