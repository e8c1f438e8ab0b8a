//! # Domain Entities
//!
//! Browser push subscriptions and the notifications sent to them.

use serde::{Deserialize, Serialize};
use shared_types::{distance_km, Coordinate, UserId};

use super::errors::PushError;

/// Keys the browser generated for payload encryption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionKeys {
    /// Client public key (P-256 ECDH, base64url).
    pub p256dh: String,
    /// Client auth secret (base64url).
    pub auth: String,
}

/// A browser push endpoint registered by a user.
///
/// Unique per `(user_id, endpoint)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushSubscription {
    pub user_id: UserId,
    pub endpoint: String,
    pub keys: SubscriptionKeys,
    /// Last position the client reported, if any. Subscriptions without a
    /// location receive every broadcast.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinate>,
}

impl PushSubscription {
    /// Reject blank endpoints and keys.
    pub fn validate(&self) -> Result<(), PushError> {
        let missing = [
            ("endpoint", &self.endpoint),
            ("keys.p256dh", &self.keys.p256dh),
            ("keys.auth", &self.keys.auth),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect::<Vec<_>>();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(PushError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )))
        }
    }

    /// Whether a broadcast centred on `origin` should reach this subscriber.
    pub fn is_within(&self, origin: Coordinate, radius_km: f64) -> bool {
        match self.location {
            Some(location) => distance_km(origin, location) <= radius_km,
            None => true,
        }
    }
}

/// A broadcast request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Falls back to `PushConfig::default_title`.
    #[serde(default)]
    pub title: Option<String>,
    pub message: String,
    /// Where the reported event happened. `None` broadcasts to everyone.
    #[serde(default)]
    pub origin: Option<Coordinate>,
    /// Falls back to `PushConfig::default_radius_km`.
    #[serde(default)]
    pub radius_km: Option<f64>,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: None,
            message: message.into(),
            origin: None,
            radius_km: None,
        }
    }

    pub fn at(mut self, origin: Coordinate, radius_km: f64) -> Self {
        self.origin = Some(origin);
        self.radius_km = Some(radius_km);
        self
    }
}

/// JSON body delivered to the service worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Outcome counts of one broadcast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReport {
    /// Subscriptions inside the broadcast area.
    pub targeted: usize,
    /// Accepted by the push service.
    pub delivered: usize,
    /// Rejected, unreachable, or gone but not removable; kept for the next
    /// broadcast.
    pub failed: usize,
    /// Reported gone by the push service and removed.
    pub pruned: usize,
}
