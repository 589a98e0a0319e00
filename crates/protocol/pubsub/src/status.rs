//! Delivery status of a publish key.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The recorded delivery status of a [`PublishKey`](crate::PublishKey).
///
/// There is deliberately no failed variant. A delivery that fails is discarded as a
/// whole, leaving the key at [`PublishStatus::NotRecorded`] so it can be retried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PublishStatus {
    /// No delivery has been recorded for the key.
    #[default]
    NotRecorded,
    /// The receiver acknowledged the delivery. Terminal.
    Succeeded,
}

impl PublishStatus {
    /// Returns `true` if the key has been delivered.
    pub const fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// Error parsing a [`PublishStatus`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown publish status: {0}")]
pub struct PublishStatusParseError(pub String);

impl FromStr for PublishStatus {
    type Err = PublishStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not-recorded" => Ok(Self::NotRecorded),
            "succeeded" => Ok(Self::Succeeded),
            other => Err(PublishStatusParseError(other.to_string())),
        }
    }
}

impl core::fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotRecorded => write!(f, "not-recorded"),
            Self::Succeeded => write!(f, "succeeded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_recorded() {
        assert_eq!(PublishStatus::default(), PublishStatus::NotRecorded);
        assert!(!PublishStatus::default().is_succeeded());
    }

    #[test]
    fn test_publish_status_serde() {
        let status = PublishStatus::Succeeded;
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, r#""succeeded""#);

        let status: PublishStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, PublishStatus::Succeeded);
    }

    #[test]
    fn test_serde_failed_status_rejected() {
        let json = r#""failed""#;
        let status: Result<PublishStatus, _> = serde_json::from_str(json);
        assert!(status.is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for status in [PublishStatus::NotRecorded, PublishStatus::Succeeded] {
            assert_eq!(status.to_string().parse::<PublishStatus>().unwrap(), status);
        }
        assert_eq!(
            "failed".parse::<PublishStatus>(),
            Err(PublishStatusParseError("failed".to_string()))
        );
    }
}
