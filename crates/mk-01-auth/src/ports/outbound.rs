//! # Outbound Ports (Driven Ports / SPI)

use crate::domain::entities::TelegramIdentity;
use async_trait::async_trait;
use shared_types::{StoreError, UserId, UserProfile};

/// Persistent user store.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert the user, or overwrite the Telegram-provided fields of the
    /// existing row with the same `telegram_id`.
    ///
    /// Rating and counters of an existing user are preserved.
    async fn upsert(&self, identity: TelegramIdentity) -> Result<UserProfile, StoreError>;

    /// Look a user up by internal id.
    async fn find(&self, id: UserId) -> Result<Option<UserProfile>, StoreError>;
}
