//! # Shared Types Crate
//!
//! Types used by more than one Mayak crate.
//!
//! ## Contents
//!
//! - **Geography**: `Coordinate` and the haversine great-circle distance.
//! - **Identity**: user/event identifiers, `UserProfile`, `AuthorSummary`.
//! - **Errors**: `StoreError`, the upstream failure every store port reports.

pub mod entities;
pub mod errors;
pub mod geo;

pub use entities::*;
pub use errors::*;
pub use geo::{distance_km, round_to_tenth, Coordinate, EARTH_RADIUS_KM};
