//! # Ports Layer
//!
//! - **Inbound (Driving)**: API the request layer calls
//! - **Outbound (Driven)**: the user store this crate needs

pub mod inbound;
pub mod outbound;
