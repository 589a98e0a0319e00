//! The delivery gate.

use crate::{
    BeaconProofVerifier, CallbackDispatcher, DeliveryError, DeliveryLock, DeliveryTx,
    DispatchRequest, PreconditionError, ProofError, ProofVerifier, PublishLedger,
    ReceiptLogParser, ReceiptParser, ReceiverRegistry, RelayConfig, RelayControl,
    metrics::Metrics,
};
use relay_pubsub::{
    EventRef, ProofMaterial, Publish, PublishKey, PublishStatus, Subscription, SubscriptionId,
};
use std::{sync::Arc, time::Instant};
use tokio::sync::broadcast;
use tracing::{debug, info, trace, warn};

/// Capacity of the notification channel. Lagging subscribers miss the oldest notifications.
const NOTIFICATION_CAPACITY: usize = 1024;

/// Result of a successful delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryOutcome {
    /// Identity of the subscription the event was delivered to.
    pub subscription_id: SubscriptionId,
    /// Identity of the delivery.
    pub publish_key: PublishKey,
    /// The emitted notification.
    pub publish: Publish,
}

/// Verifies source-chain events and delivers each of them at most once per subscription.
///
/// Every call to [`Publisher::deliver`] is one attempt that either applies all of its
/// effects (the ledger entry and the notification) or none of them.
#[derive(Debug)]
pub struct Publisher<L> {
    control: Arc<RelayControl>,
    ledger: L,
    verifier: Box<dyn ProofVerifier>,
    parser: Box<dyn ReceiptParser>,
    dispatcher: CallbackDispatcher,
    lock: DeliveryLock,
    notifications: broadcast::Sender<Publish>,
}

impl<L: PublishLedger> Publisher<L> {
    /// Creates a publisher using the beacon chain proof primitives.
    pub fn new(
        config: &RelayConfig,
        control: Arc<RelayControl>,
        ledger: L,
        receivers: Arc<ReceiverRegistry>,
    ) -> Self {
        Metrics::init();
        let (notifications, _) = broadcast::channel(NOTIFICATION_CAPACITY);
        Self {
            control,
            ledger,
            verifier: Box::new(BeaconProofVerifier::new(config.clone())),
            parser: Box::new(ReceiptLogParser),
            dispatcher: CallbackDispatcher::new(receivers),
            lock: DeliveryLock::new(),
            notifications,
        }
    }

    /// Replaces the proof verifier.
    pub fn with_verifier(mut self, verifier: impl ProofVerifier + 'static) -> Self {
        self.verifier = Box::new(verifier);
        self
    }

    /// Replaces the receipt parser.
    pub fn with_parser(mut self, parser: impl ReceiptParser + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Subscribes to notifications of committed deliveries.
    pub fn subscribe(&self) -> broadcast::Receiver<Publish> {
        self.notifications.subscribe()
    }

    /// Returns the administrative controls.
    pub const fn control(&self) -> &Arc<RelayControl> {
        &self.control
    }

    /// Returns the ledger.
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Returns the delivery status of `key`.
    pub fn status(&self, key: &PublishKey) -> Result<PublishStatus, DeliveryError> {
        Ok(self.ledger.status(key)?)
    }

    /// Verifies `event` against `proof` and delivers it to the receiver of `subscription`.
    ///
    /// Succeeds only if the receiver acknowledged the event, in which case the delivery is
    /// recorded and notified. On error nothing is recorded, so the attempt may be retried.
    pub fn deliver(
        &self,
        event: &EventRef,
        proof: &ProofMaterial,
        subscription: &Subscription,
    ) -> Result<DeliveryOutcome, DeliveryError> {
        let started = Instant::now();
        let chain_id = subscription.sourceChainId;

        let result = self.try_deliver(event, proof, subscription);
        Metrics::record_delivery(chain_id, started, &result);

        match &result {
            Ok(outcome) => info!(
                target: "relay::gate",
                chain_id,
                subscription_id = %outcome.subscription_id,
                publish_key = %outcome.publish_key,
                callback = %subscription.callbackAddress,
                "Event delivered"
            ),
            Err(err) => warn!(
                target: "relay::gate",
                chain_id,
                source_slot = event.source_slot,
                tx_slot = event.tx_slot,
                kind = err.kind(),
                %err,
                "Delivery rejected"
            ),
        }
        result
    }

    fn try_deliver(
        &self,
        event: &EventRef,
        proof: &ProofMaterial,
        subscription: &Subscription,
    ) -> Result<DeliveryOutcome, DeliveryError> {
        let _guard = self.lock.acquire()?;

        if self.control.is_paused() {
            return Err(PreconditionError::Paused.into());
        }

        let chain_id = subscription.sourceChainId;
        let oracle = self
            .control
            .header_oracle(chain_id)
            .ok_or(PreconditionError::LightClientUnset(chain_id))?;
        if !oracle.is_consistent() {
            return Err(PreconditionError::LightClientInconsistent(chain_id).into());
        }

        let subscription_id = subscription.id();
        let publish_key = event.publish_key(subscription_id);
        if self.ledger.status(&publish_key)?.is_succeeded() {
            return Err(DeliveryError::AlreadyDelivered(publish_key));
        }

        let header_root = oracle
            .header_root(event.source_slot)
            .ok_or(ProofError::HeaderMissing(event.source_slot))?;
        if !self.verifier.verify(
            proof.receipts_root,
            &proof.receipts_root_proof,
            header_root,
            event.source_slot,
            event.tx_slot,
            chain_id,
        ) {
            return Err(ProofError::InvalidProof.into());
        }

        let log = self
            .parser
            .parse(
                &proof.receipt_proof,
                proof.receipts_root,
                &event.tx_index_encoded,
                event.log_index,
                subscription.sourceAddress,
                subscription.eventSig,
            )
            .map_err(ProofError::EventNotFound)?;
        debug!(
            target: "relay::gate",
            %publish_key,
            topics = log.topics().len(),
            data_len = log.data.len(),
            "Event proven"
        );

        let mut tx = DeliveryTx::new();
        let publish = self.dispatcher.dispatch(
            &mut tx,
            DispatchRequest {
                subscription_id,
                subscription,
                tx_slot: event.tx_slot,
                publish_key,
                log: &log,
            },
            self.control.callback_gas_limit(),
        )?;

        self.ledger.commit(&tx)?;
        for notification in tx.into_notifications() {
            if self.notifications.send(notification).is_err() {
                trace!(target: "relay::gate", %publish_key, "No notification subscribers");
            }
        }

        Ok(DeliveryOutcome { subscription_id, publish_key, publish })
    }
}
