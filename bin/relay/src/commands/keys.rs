//! Keys Subcommand

use super::read_json;
use crate::flags::GlobalArgs;
use alloy_primitives::Bytes;
use clap::Parser;
use relay_pubsub::{PublishKey, Subscription, SubscriptionId};
use relay_receipt::encode_tx_index;
use serde::Serialize;
use std::path::PathBuf;

/// The `keys` Subcommand
///
/// Prints the identities the relay derives for an event: the subscription id and the
/// publish key guarding at-most-once delivery.
///
/// # Usage
///
/// ```sh
/// relay keys --subscription <FILE> --tx-slot <SLOT> --tx-index <INDEX> --log-index <INDEX>
/// ```
#[derive(Parser, Debug, Clone)]
#[command(about = "Derives the subscription id and publish key of an event")]
pub(crate) struct KeysCommand {
    /// Path to the subscription, as JSON.
    #[arg(long)]
    pub(crate) subscription: PathBuf,
    /// Slot of the block containing the transaction.
    #[arg(long)]
    pub(crate) tx_slot: u64,
    /// Index of the transaction within its block.
    #[arg(long)]
    pub(crate) tx_index: u64,
    /// Index of the log within the transaction receipt.
    #[arg(long)]
    pub(crate) log_index: u64,
}

/// Identities of one event delivered to one subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EventKeys {
    pub(crate) subscription_id: SubscriptionId,
    pub(crate) tx_index_encoded: Bytes,
    pub(crate) publish_key: PublishKey,
}

impl KeysCommand {
    /// Runs the subcommand.
    pub(crate) fn run(self, _args: &GlobalArgs) -> anyhow::Result<()> {
        let subscription: Subscription = read_json(&self.subscription)?;
        let keys = self.keys(&subscription);
        println!("{}", serde_json::to_string_pretty(&keys)?);
        Ok(())
    }

    pub(crate) fn keys(&self, subscription: &Subscription) -> EventKeys {
        let subscription_id = subscription.id();
        let tx_index_encoded = encode_tx_index(self.tx_index);
        let publish_key =
            PublishKey::derive(self.tx_slot, &tx_index_encoded, self.log_index, subscription_id);
        EventKeys { subscription_id, tx_index_encoded, publish_key }
    }
}
