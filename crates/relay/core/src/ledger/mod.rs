//! The idempotency ledger: durable record of delivered publish keys.
//!
//! Only successful deliveries are ever written. A failed attempt stages nothing that
//! survives it, see [`DeliveryTx`].

mod errors;
pub use errors::LedgerError;

mod tx;
pub use tx::DeliveryTx;

mod memory;
pub use memory::MemoryLedger;

mod file;
pub use file::FileLedger;

use auto_impl::auto_impl;
use relay_pubsub::{PublishKey, PublishStatus};
use std::fmt::Debug;

/// Storage of [`PublishStatus`] entries.
///
/// Implementations must be thread-safe, and [`PublishLedger::commit`] must be atomic: a
/// transaction is either applied in full or not at all.
#[auto_impl(&, Box, Arc)]
pub trait PublishLedger: Debug + Send + Sync {
    /// Returns the status of `key`.
    fn status(&self, key: &PublishKey) -> Result<PublishStatus, LedgerError>;

    /// Records every success staged in `tx`.
    ///
    /// Fails with [`LedgerError::Conflict`], applying nothing, if any staged key has
    /// already succeeded.
    fn commit(&self, tx: &DeliveryTx) -> Result<(), LedgerError>;
}
