//! # Logging Push Dispatcher
//!
//! `PushDispatcher` for environments without VAPID credentials: serializes
//! the payload, enforces the Web Push size limit and logs the delivery
//! instead of sending it.

use async_trait::async_trait;
use tracing::info;

use mk_03_push::{DispatchError, NotificationPayload, PushDispatcher, PushSubscription};

/// Largest payload a push service accepts, in bytes.
pub const MAX_PAYLOAD_BYTES: usize = 4096;

#[derive(Debug, Default)]
pub struct LoggingDispatcher;

#[async_trait]
impl PushDispatcher for LoggingDispatcher {
    async fn dispatch(
        &self,
        subscription: &PushSubscription,
        payload: &NotificationPayload,
    ) -> Result<(), DispatchError> {
        let body = serde_json::to_vec(payload)
            .map_err(|e| DispatchError::Rejected(e.to_string()))?;
        if body.len() > MAX_PAYLOAD_BYTES {
            return Err(DispatchError::Rejected(format!(
                "payload is {} bytes, limit {MAX_PAYLOAD_BYTES}",
                body.len()
            )));
        }

        info!(
            user_id = subscription.user_id,
            bytes = body.len(),
            title = %payload.title,
            "[LoggingDispatcher] Push notification logged"
        );
        Ok(())
    }
}
