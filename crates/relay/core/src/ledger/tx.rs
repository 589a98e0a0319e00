//! Unit of work of one delivery attempt.

use relay_pubsub::{Publish, PublishKey};

/// Effects staged by one delivery attempt.
///
/// Nothing is applied until the transaction is committed to a
/// [`PublishLedger`](super::PublishLedger); dropping it discards every staged effect.
#[derive(Debug, Default)]
#[must_use = "staged effects are discarded unless committed"]
pub struct DeliveryTx {
    succeeded: Vec<PublishKey>,
    notifications: Vec<Publish>,
}

impl DeliveryTx {
    /// Creates an empty transaction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages `key` as succeeded.
    pub fn record_success(&mut self, key: PublishKey) {
        self.succeeded.push(key);
    }

    /// Stages a notification, emitted only once the transaction is committed.
    pub fn notify(&mut self, publish: Publish) {
        self.notifications.push(publish);
    }

    /// Returns the keys staged as succeeded.
    pub fn succeeded(&self) -> &[PublishKey] {
        &self.succeeded
    }

    /// Returns the staged notifications.
    pub fn notifications(&self) -> &[Publish] {
        &self.notifications
    }

    /// Returns `true` if nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.succeeded.is_empty() && self.notifications.is_empty()
    }

    /// Consumes the transaction, returning its notifications.
    pub fn into_notifications(self) -> Vec<Publish> {
        self.notifications
    }
}
