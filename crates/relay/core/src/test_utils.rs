//! Fixtures shared by the delivery tests.

use crate::{
    CallOutcome, DeliveryError, DeliveryOutcome, MemoryLedger, PublishLedger, Publisher,
    ReceiverRegistry, RelayConfig, RelayControl, StaticHeaderOracle, SubscriptionReceiver,
};
use alloy_primitives::{Address, B256, Bytes, ChainId};
use alloy_sol_types::SolCall;
use relay_pubsub::{EventRef, ProofMaterial, PublishCall, Subscription, encode_ack};
use relay_receipt::{
    encode_tx_index,
    test_utils::{ReceiptTrie, receipt_with_logs},
};
use relay_ssz::{
    ForkSchedule,
    test_utils::{receipts_root_proof, skipped_slot_proof},
};
use std::sync::{
    Arc, Mutex, OnceLock, Weak,
    atomic::{AtomicBool, Ordering},
};

pub(crate) const CHAIN_ID: ChainId = 1;
pub(crate) const SOURCE: Address = Address::repeat_byte(0x50);
pub(crate) const CALLBACK: Address = Address::repeat_byte(0xcb);
pub(crate) const EVENT_SIG: B256 = B256::repeat_byte(0xe5);
pub(crate) const TX_SLOT: u64 = 1_000;
pub(crate) const SOURCE_SLOT: u64 = 1_010;
pub(crate) const TX_INDEX: u64 = 1;
pub(crate) const LOG_INDEX: u64 = 1;

/// A provable event on chain [`CHAIN_ID`], a subscription to it, and the relay state
/// needed to deliver it.
#[derive(Debug)]
pub(crate) struct Fixture {
    pub(crate) config: RelayConfig,
    pub(crate) control: Arc<RelayControl>,
    pub(crate) oracle: Arc<StaticHeaderOracle>,
    pub(crate) receivers: Arc<ReceiverRegistry>,
    pub(crate) subscription: Subscription,
    pub(crate) event: EventRef,
    pub(crate) proof: ProofMaterial,
    pub(crate) header_root: B256,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        Self::build(false)
    }

    /// Like [`Fixture::new`], but the slot after [`TX_SLOT`] is skipped: the source state
    /// holds the same block root for both slots.
    pub(crate) fn skipping_next_slot() -> Self {
        Self::build(true)
    }

    fn build(skip_next_slot: bool) -> Self {
        let receipts = vec![
            receipt_with_logs(vec![(SOURCE, vec![EVENT_SIG], vec![0])]),
            receipt_with_logs(vec![
                (Address::repeat_byte(0x77), vec![EVENT_SIG], vec![]),
                (SOURCE, vec![EVENT_SIG, B256::repeat_byte(0x0a)], vec![0xca, 0xfe]),
            ]),
            receipt_with_logs(vec![]),
        ];
        let trie = ReceiptTrie::new(&receipts);

        let prove = if skip_next_slot { skipped_slot_proof } else { receipts_root_proof };
        let (branch, header_root) =
            prove(trie.root, SOURCE_SLOT, TX_SLOT, &ForkSchedule::MAINNET).unwrap();

        let oracle = Arc::new(StaticHeaderOracle::new());
        oracle.insert_header(SOURCE_SLOT, header_root);

        let config = RelayConfig::default();
        let control = Arc::new(RelayControl::from(&config));
        control.set_header_oracle(CHAIN_ID, oracle.clone());

        Self {
            config,
            control,
            oracle,
            receivers: Arc::new(ReceiverRegistry::new()),
            subscription: Subscription::new(CHAIN_ID, SOURCE, CALLBACK, EVENT_SIG),
            event: EventRef {
                source_slot: SOURCE_SLOT,
                tx_slot: TX_SLOT,
                tx_index_encoded: encode_tx_index(TX_INDEX),
                log_index: LOG_INDEX,
            },
            proof: ProofMaterial {
                receipts_root: trie.root,
                receipts_root_proof: branch,
                receipt_proof: trie.proof(TX_INDEX),
            },
            header_root,
        }
    }

    /// A publisher over a fresh in-memory ledger.
    pub(crate) fn publisher(&self) -> Publisher<MemoryLedger> {
        self.publisher_with(MemoryLedger::new())
    }

    pub(crate) fn publisher_with<L: PublishLedger>(&self, ledger: L) -> Publisher<L> {
        Publisher::new(&self.config, Arc::clone(&self.control), ledger, Arc::clone(&self.receivers))
    }

    /// Deploys `receiver` at [`CALLBACK`].
    pub(crate) fn deploy<R: SubscriptionReceiver + 'static>(&self, receiver: R) -> Arc<R> {
        let receiver = Arc::new(receiver);
        self.receivers.register(CALLBACK, receiver.clone());
        receiver
    }

    pub(crate) fn deliver<L: PublishLedger>(
        &self,
        publisher: &Publisher<L>,
    ) -> Result<DeliveryOutcome, DeliveryError> {
        publisher.deliver(&self.event, &self.proof, &self.subscription)
    }
}

/// Behaviour of a [`ScriptedReceiver`].
#[derive(Debug, Clone)]
pub(crate) enum Script {
    /// Acknowledges every call.
    Ack,
    /// Reverts without data.
    Revert,
    /// Reverts with the given data.
    RevertWith(Bytes),
    /// Succeeds returning the given data.
    Return(Bytes),
    /// Acknowledges if given at least this budget, runs out of gas otherwise.
    NeedsGas(u64),
}

/// A receiver following a [`Script`] and recording the calls it acknowledged.
#[derive(Debug)]
pub(crate) struct ScriptedReceiver {
    script: Mutex<Script>,
    calls: Mutex<Vec<PublishCall>>,
}

impl ScriptedReceiver {
    pub(crate) fn new(script: Script) -> Self {
        Self { script: Mutex::new(script), calls: Mutex::default() }
    }

    pub(crate) fn set_script(&self, script: Script) {
        *self.script.lock().unwrap() = script;
    }

    /// Calls that completed with an acknowledgement.
    pub(crate) fn acknowledged(&self) -> Vec<PublishCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl SubscriptionReceiver for ScriptedReceiver {
    fn call(&self, calldata: &Bytes, gas_limit: u64) -> CallOutcome {
        let outcome = match self.script.lock().unwrap().clone() {
            Script::Ack => CallOutcome::success(encode_ack()),
            Script::Revert => CallOutcome::revert(Bytes::new()),
            Script::RevertWith(data) => CallOutcome::revert(data),
            Script::Return(data) => CallOutcome::success(data),
            Script::NeedsGas(required) if gas_limit < required => CallOutcome::out_of_gas(),
            Script::NeedsGas(_) => CallOutcome::success(encode_ack()),
        };
        if outcome.success && outcome.output == encode_ack() {
            self.calls.lock().unwrap().push(PublishCall::abi_decode(calldata).unwrap());
        }
        outcome
    }
}

/// A receiver that, on its first call, delivers the fixture event through `target`
/// before acknowledging.
#[derive(Debug)]
pub(crate) struct ReentrantReceiver<L> {
    target: OnceLock<Weak<Publisher<L>>>,
    event: EventRef,
    proof: ProofMaterial,
    subscription: Subscription,
    fired: AtomicBool,
    inner: Mutex<Option<Result<DeliveryOutcome, DeliveryError>>>,
}

impl<L> ReentrantReceiver<L> {
    pub(crate) fn new(fixture: &Fixture) -> Self {
        Self {
            target: OnceLock::new(),
            event: fixture.event.clone(),
            proof: fixture.proof.clone(),
            subscription: fixture.subscription.clone(),
            fired: AtomicBool::new(false),
            inner: Mutex::default(),
        }
    }

    pub(crate) fn set_target(&self, publisher: &Arc<Publisher<L>>) {
        self.target.set(Arc::downgrade(publisher)).unwrap();
    }

    /// Result of the nested delivery, once made.
    pub(crate) fn take_inner(&self) -> Option<Result<DeliveryOutcome, DeliveryError>> {
        self.inner.lock().unwrap().take()
    }
}

impl<L: PublishLedger + 'static> SubscriptionReceiver for ReentrantReceiver<L> {
    fn call(&self, _calldata: &Bytes, _gas_limit: u64) -> CallOutcome {
        if !self.fired.swap(true, Ordering::SeqCst) {
            let publisher = self.target.get().and_then(Weak::upgrade).unwrap();
            let result = publisher.deliver(&self.event, &self.proof, &self.subscription);
            *self.inner.lock().unwrap() = Some(result);
        }
        CallOutcome::success(encode_ack())
    }
}
