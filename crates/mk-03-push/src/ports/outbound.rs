//! # Outbound Ports (Driven Ports / SPI)

use crate::domain::entities::{NotificationPayload, PushSubscription};
use crate::domain::errors::DispatchError;
use async_trait::async_trait;
use shared_types::{StoreError, UserId};

/// Persistent subscription store.
#[async_trait]
pub trait SubscriptionStore: Send + Sync {
    /// Insert, or replace the keys and location of the existing
    /// `(user_id, endpoint)` row.
    async fn upsert(&self, subscription: PushSubscription) -> Result<(), StoreError>;

    /// Every registered subscription.
    async fn all(&self) -> Result<Vec<PushSubscription>, StoreError>;

    /// Drop a subscription. Returns whether it existed.
    async fn remove(&self, user_id: UserId, endpoint: &str) -> Result<bool, StoreError>;
}

/// Web Push transport (VAPID signing and payload encryption live here).
#[async_trait]
pub trait PushDispatcher: Send + Sync {
    async fn dispatch(
        &self,
        subscription: &PushSubscription,
        payload: &NotificationPayload,
    ) -> Result<(), DispatchError>;
}
