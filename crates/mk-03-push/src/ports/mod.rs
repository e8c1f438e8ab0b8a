//! # Ports Layer
//!
//! - **Inbound (Driving)**: `PushApi`
//! - **Outbound (Driven)**: `SubscriptionStore`, `PushDispatcher`

pub mod inbound;
pub mod outbound;
