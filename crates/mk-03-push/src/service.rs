//! # Push Service
//!
//! Application service implementing `PushApi`.
//!
//! ## Broadcast flow
//!
//! 1. Resolve title and radius defaults
//! 2. Load every subscription and keep those in range of the origin
//! 3. Dispatch the payload to each, one at a time
//! 4. Remove subscriptions the push service reports as gone

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::config::PushConfig;
use crate::domain::entities::{DeliveryReport, Notification, NotificationPayload, PushSubscription};
use crate::domain::errors::{DispatchError, PushError};
use crate::ports::inbound::PushApi;
use crate::ports::outbound::{PushDispatcher, SubscriptionStore};

/// Push service.
pub struct PushService<S: SubscriptionStore, D: PushDispatcher> {
    config: PushConfig,
    subscriptions: Arc<S>,
    dispatcher: Arc<D>,
}

impl<S: SubscriptionStore, D: PushDispatcher> PushService<S, D> {
    pub fn new(config: PushConfig, subscriptions: Arc<S>, dispatcher: Arc<D>) -> Self {
        Self {
            config,
            subscriptions,
            dispatcher,
        }
    }

    fn payload_for(&self, notification: &Notification) -> NotificationPayload {
        let title = notification
            .title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .unwrap_or(self.config.default_title.as_str())
            .to_string();

        NotificationPayload {
            title,
            message: notification.message.clone(),
            latitude: notification.origin.map(|origin| origin.latitude),
            longitude: notification.origin.map(|origin| origin.longitude),
        }
    }

    /// Send one payload and record the outcome. Never aborts the broadcast.
    async fn deliver(
        &self,
        subscription: &PushSubscription,
        payload: &NotificationPayload,
        report: &mut DeliveryReport,
    ) {
        match self.dispatcher.dispatch(subscription, payload).await {
            Ok(()) => report.delivered += 1,
            Err(DispatchError::Gone) => {
                match self
                    .subscriptions
                    .remove(subscription.user_id, &subscription.endpoint)
                    .await
                {
                    Ok(removed) => {
                        if removed {
                            report.pruned += 1;
                        }
                        debug!(
                            user_id = subscription.user_id,
                            "[mk-03] Expired subscription removed"
                        );
                    }
                    Err(error) => {
                        report.failed += 1;
                        warn!(
                            user_id = subscription.user_id,
                            %error,
                            "[mk-03] Expired subscription could not be removed"
                        );
                    }
                }
            }
            Err(error) => {
                report.failed += 1;
                warn!(
                    user_id = subscription.user_id,
                    %error,
                    "[mk-03] Push delivery failed"
                );
            }
        }
    }
}

#[async_trait]
impl<S: SubscriptionStore, D: PushDispatcher> PushApi for PushService<S, D> {
    async fn subscribe(&self, subscription: PushSubscription) -> Result<(), PushError> {
        subscription.validate()?;

        let user_id = subscription.user_id;
        let located = subscription.location.is_some();
        self.subscriptions.upsert(subscription).await?;

        info!(user_id, located, "[mk-03] Push subscription saved");
        Ok(())
    }

    async fn broadcast(&self, notification: Notification) -> Result<DeliveryReport, PushError> {
        if notification.message.trim().is_empty() {
            return Err(PushError::Validation("message is required".to_string()));
        }

        let payload = self.payload_for(&notification);
        let radius_km = notification.radius_km.unwrap_or(self.config.default_radius_km);

        let targets: Vec<PushSubscription> = self
            .subscriptions
            .all()
            .await?
            .into_iter()
            .filter(|sub| match notification.origin {
                Some(origin) => sub.is_within(origin, radius_km),
                None => true,
            })
            .collect();

        let mut report = DeliveryReport {
            targeted: targets.len(),
            ..DeliveryReport::default()
        };
        for subscription in &targets {
            self.deliver(subscription, &payload, &mut report).await;
        }

        info!(
            targeted = report.targeted,
            delivered = report.delivered,
            failed = report.failed,
            pruned = report.pruned,
            "[mk-03] Broadcast finished"
        );
        Ok(report)
    }
}

// =============================================================================
// TESTS
// =============================================================================
