//! # Push Notifications Subsystem (mk-03)
//!
//! Stores browser push subscriptions and fans a notification out to the
//! subscribers near a reported event.
//!
//! ## Architecture
//!
//! - `domain/` - subscriptions, notifications, delivery report
//! - `ports/` - `PushApi` (inbound), `SubscriptionStore` and
//!   `PushDispatcher` (outbound)
//! - `service.rs` - `PushService`
//!
//! Delivery is sequential. A subscription the push service reports as gone
//! is removed; any other failure is counted and the subscription is kept.

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::config::{PushConfig, DEFAULT_BROADCAST_RADIUS_KM, DEFAULT_TITLE};
pub use domain::entities::{
    DeliveryReport, Notification, NotificationPayload, PushSubscription, SubscriptionKeys,
};
pub use domain::errors::{DispatchError, PushError};
pub use ports::inbound::PushApi;
pub use ports::outbound::{PushDispatcher, SubscriptionStore};
pub use service::PushService;
