//! # Inbound Ports (Driving Ports / API)

use crate::domain::entities::{DeliveryReport, Notification, PushSubscription};
use crate::domain::errors::PushError;
use async_trait::async_trait;

/// Push notification API.
#[async_trait]
pub trait PushApi: Send + Sync {
    /// Register or refresh a browser subscription.
    ///
    /// # Errors
    /// * `PushError::Validation` - blank endpoint or keys
    async fn subscribe(&self, subscription: PushSubscription) -> Result<(), PushError>;

    /// Send a notification to every subscriber in range.
    ///
    /// Per-subscription delivery failures are counted in the report, not
    /// returned as errors.
    ///
    /// # Errors
    /// * `PushError::Validation` - blank message
    /// * `PushError::Store` - subscriptions could not be loaded
    async fn broadcast(&self, notification: Notification) -> Result<DeliveryReport, PushError>;
}
