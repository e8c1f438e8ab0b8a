//! # Ports Layer
//!
//! - **Inbound (Driving)**: `RoadEventApi`
//! - **Outbound (Driven)**: `EventRepository`

pub mod inbound;
pub mod outbound;
