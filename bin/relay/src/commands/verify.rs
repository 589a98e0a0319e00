//! Verify Subcommand

use super::read_json;
use crate::flags::GlobalArgs;
use alloy_primitives::{B256, Bytes};
use anyhow::Result;
use clap::Parser;
use relay_core::{
    BeaconProofVerifier, ProofError, ProofVerifier, ReceiptLogParser, ReceiptParser, RelayConfig,
};
use relay_pubsub::{EventRef, ProofMaterial, PublishKey, Subscription, SubscriptionId};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// The `verify` Subcommand
///
/// Runs the proof checks of a delivery offline: the receipts root against the trusted
/// header root, then the event against the receipts root. Nothing is delivered.
///
/// # Usage
///
/// ```sh
/// relay verify --bundle <FILE>
/// ```
#[derive(Parser, Debug, Clone)]
#[command(about = "Verifies a proof bundle against a trusted header root")]
pub(crate) struct VerifyCommand {
    /// Path to the proof bundle, as JSON.
    #[arg(long)]
    pub(crate) bundle: PathBuf,
}

/// Everything needed to prove one event without a header oracle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProofBundle {
    /// Trusted header root at the event's source slot.
    pub(crate) header_root: B256,
    pub(crate) subscription: Subscription,
    pub(crate) event: EventRef,
    pub(crate) proof: ProofMaterial,
}

/// An event recovered from a verified bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VerifiedEvent {
    pub(crate) subscription_id: SubscriptionId,
    pub(crate) publish_key: PublishKey,
    pub(crate) topics: Vec<B256>,
    pub(crate) data: Bytes,
}

impl VerifyCommand {
    /// Runs the subcommand.
    pub(crate) fn run(self, args: &GlobalArgs) -> Result<()> {
        let config = args.relay_config()?;
        let bundle: ProofBundle = read_json(&self.bundle)?;
        let verified = verify_bundle(&config, &bundle)?;
        println!("{}", serde_json::to_string_pretty(&verified)?);
        Ok(())
    }
}

/// Verifies `bundle` with the proof primitives of a [`Publisher`](relay_core::Publisher).
pub(crate) fn verify_bundle(config: &RelayConfig, bundle: &ProofBundle) -> Result<VerifiedEvent> {
    let ProofBundle { header_root, subscription, event, proof } = bundle;
    let chain_id = subscription.sourceChainId;

    let verifier = BeaconProofVerifier::new(config.clone());
    if !verifier.verify(
        proof.receipts_root,
        &proof.receipts_root_proof,
        *header_root,
        event.source_slot,
        event.tx_slot,
        chain_id,
    ) {
        return Err(ProofError::InvalidProof.into());
    }

    let log = ReceiptLogParser
        .parse(
            &proof.receipt_proof,
            proof.receipts_root,
            &event.tx_index_encoded,
            event.log_index,
            subscription.sourceAddress,
            subscription.eventSig,
        )
        .map_err(ProofError::EventNotFound)?;

    let subscription_id = subscription.id();
    let publish_key = event.publish_key(subscription_id);
    info!(
        target: "relay::cli",
        chain_id,
        %publish_key,
        topics = log.topics().len(),
        "Bundle verified"
    );

    Ok(VerifiedEvent {
        subscription_id,
        publish_key,
        topics: log.topics().to_vec(),
        data: log.data,
    })
}
