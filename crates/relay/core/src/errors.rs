//! Error types for a delivery attempt.
//!
//! Every error discards the attempt as a whole; none of them leaves durable state behind.

use crate::LedgerError;
use alloy_primitives::ChainId;
use relay_pubsub::PublishKey;
use relay_receipt::ReceiptError;
use thiserror::Error;

/// A delivery precondition did not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PreconditionError {
    /// Delivery is administratively paused.
    #[error("delivery is paused")]
    Paused,
    /// No header oracle is configured for the source chain.
    #[error("no light client configured for chain {0}")]
    LightClientUnset(ChainId),
    /// The header oracle of the source chain reports conflicting headers.
    #[error("light client for chain {0} is inconsistent")]
    LightClientInconsistent(ChainId),
    /// A delivery was attempted from within a delivery on the same thread.
    #[error("reentrant delivery")]
    Reentrant,
}

/// The event could not be proven.
#[derive(Debug, Error)]
pub enum ProofError {
    /// The header oracle has no header root for the source slot.
    #[error("no header root for slot {0}")]
    HeaderMissing(u64),
    /// The receipts root is not committed to by the header root.
    #[error("invalid receipts root proof")]
    InvalidProof,
    /// No matching log exists in the proven receipt.
    #[error("event not found: {0}")]
    EventNotFound(#[source] ReceiptError),
}

/// The receiver did not acknowledge the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The receiver call reverted or ran out of resources.
    #[error("receiver call failed")]
    CallFailed,
    /// The receiver did not return the handler selector.
    #[error("receiver returned an invalid selector")]
    InvalidSelector,
}

/// Errors returned by [`Publisher::deliver`](crate::Publisher::deliver).
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// A precondition did not hold.
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
    /// The event could not be proven.
    #[error(transparent)]
    Proof(#[from] ProofError),
    /// The event was already delivered to the subscription.
    #[error("already delivered: {0}")]
    AlreadyDelivered(PublishKey),
    /// The receiver did not acknowledge the event.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    /// The ledger could not be read or written.
    #[error(transparent)]
    Ledger(LedgerError),
}

impl DeliveryError {
    /// Returns the error class, used as a metrics label.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Precondition(_) => "precondition",
            Self::Proof(_) => "proof",
            Self::AlreadyDelivered(_) => "replay",
            Self::Dispatch(_) => "dispatch",
            Self::Ledger(_) => "ledger",
        }
    }
}

impl From<LedgerError> for DeliveryError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Conflict(key) => Self::AlreadyDelivered(key),
            other => Self::Ledger(other),
        }
    }
}
