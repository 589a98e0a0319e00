#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod errors;
pub use errors::{DeliveryError, DispatchError, PreconditionError, ProofError};

mod config;
pub use config::{ChainForkSchedule, RelayConfig};

mod control;
pub use control::RelayControl;

mod oracle;
pub use oracle::{HeaderOracle, StaticHeaderOracle};

mod verifier;
pub use verifier::{BeaconProofVerifier, ProofVerifier, ReceiptLogParser, ReceiptParser};

mod ledger;
pub use ledger::{DeliveryTx, FileLedger, LedgerError, MemoryLedger, PublishLedger};

mod dispatch;
pub use dispatch::{
    CallOutcome, CallbackDispatcher, DispatchRequest, PublishHandler, PublishHandlerAdapter,
    ReceiverRegistry, SubscriptionReceiver,
};

mod guard;
pub use guard::{DeliveryGuard, DeliveryLock};

mod publisher;
pub use publisher::{DeliveryOutcome, Publisher};

mod metrics;

#[cfg(test)]
mod test_utils;
