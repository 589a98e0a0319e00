#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod subscription;
pub use subscription::{Subscription, SubscriptionId};

mod event;
pub use event::{EventRef, ProofMaterial};

mod key;
pub use key::PublishKey;

mod status;
pub use status::{PublishStatus, PublishStatusParseError};

mod notification;
pub use notification::Publish;

mod receiver;
pub use receiver::{
    HANDLE_PUBLISH_SELECTOR, ISubscriptionReceiver, PublishCall, decode_ack, encode_ack,
    encode_publish_call,
};
