#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod errors;
pub use errors::ReceiptError;

mod proof;
pub use proof::{encode_tx_index, verify_receipt_proof};

mod event;
pub use event::parse_event;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
