use relay_pubsub::PublishKey;
use thiserror::Error;

/// Errors raised by a [`PublishLedger`](super::PublishLedger).
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The key has already been recorded as succeeded.
    #[error("publish key {0} already succeeded")]
    Conflict(PublishKey),
    /// The backing file could not be read or written.
    #[error("ledger I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The backing file could not be encoded or decoded.
    #[error("ledger encoding error: {0}")]
    Codec(#[from] serde_json::Error),
    /// A writer panicked while holding the ledger lock.
    #[error("ledger lock poisoned")]
    Poisoned,
}
