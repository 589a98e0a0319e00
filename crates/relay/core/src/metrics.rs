use crate::{DeliveryError, DeliveryOutcome};
use alloy_primitives::ChainId;
use std::time::Instant;

#[derive(Debug, Clone)]
pub(crate) struct Metrics;

impl Metrics {
    pub(crate) const RELAY_DELIVERY_SUCCESS_TOTAL: &'static str = "relay_delivery_success_total";
    pub(crate) const RELAY_DELIVERY_ERROR_TOTAL: &'static str = "relay_delivery_error_total";
    pub(crate) const RELAY_DELIVERY_DURATION_SECONDS: &'static str =
        "relay_delivery_duration_seconds";

    pub(crate) fn init() {
        Self::describe();
        Self::zero();
    }

    fn describe() {
        metrics::describe_counter!(
            Self::RELAY_DELIVERY_SUCCESS_TOTAL,
            metrics::Unit::Count,
            "Total number of events delivered and acknowledged",
        );

        metrics::describe_counter!(
            Self::RELAY_DELIVERY_ERROR_TOTAL,
            metrics::Unit::Count,
            "Total number of rejected delivery attempts, by error class",
        );

        metrics::describe_histogram!(
            Self::RELAY_DELIVERY_DURATION_SECONDS,
            metrics::Unit::Seconds,
            "Latency of successful delivery attempts",
        );
    }

    fn zero() {
        metrics::counter!(Self::RELAY_DELIVERY_SUCCESS_TOTAL).increment(0);

        for kind in ["precondition", "proof", "replay", "dispatch", "ledger"] {
            metrics::counter!(Self::RELAY_DELIVERY_ERROR_TOTAL, "kind" => kind).increment(0);
        }
    }

    pub(crate) fn record_delivery(
        chain_id: ChainId,
        started: Instant,
        result: &Result<DeliveryOutcome, DeliveryError>,
    ) {
        match result {
            Ok(_) => {
                metrics::counter!(
                    Self::RELAY_DELIVERY_SUCCESS_TOTAL,
                    "chain_id" => chain_id.to_string(),
                )
                .increment(1);

                metrics::histogram!(
                    Self::RELAY_DELIVERY_DURATION_SECONDS,
                    "chain_id" => chain_id.to_string(),
                )
                .record(started.elapsed().as_secs_f64());
            }
            Err(err) => {
                metrics::counter!(
                    Self::RELAY_DELIVERY_ERROR_TOTAL,
                    "chain_id" => chain_id.to_string(),
                    "kind" => err.kind(),
                )
                .increment(1);
            }
        }
    }
}
