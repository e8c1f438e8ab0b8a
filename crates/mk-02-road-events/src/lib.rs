//! # Road Events (MK-02)
//!
//! Georeferenced incident reports: listing by proximity, reporting, and
//! helpful votes.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): entities, listing config, and the
//!   haversine proximity filter
//! - **Ports Layer** (`ports/`): `RoadEventApi` inbound, `EventRepository`
//!   outbound
//! - **Service Layer** (`service.rs`): listing window, report validation,
//!   vote bookkeeping
//!
//! ## Listing
//!
//! The store returns active events from the last 24 hours, newest first.
//! The proximity filter drops everything outside the radius and annotates
//! the rest with their distance; it never reorders.

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::config::{ListingConfig, DEFAULT_MAX_EVENT_AGE, DEFAULT_ORIGIN, DEFAULT_RADIUS_KM};
pub use domain::entities::{
    AnnotatedRecord, EventKind, GeoRecord, Located, NearbyQuery, NewEventReport,
    UnknownEventKind, VoteOutcome, WithDistance,
};
pub use domain::errors::EventError;
pub use domain::proximity::filter_by_radius;
pub use ports::inbound::RoadEventApi;
pub use ports::outbound::EventRepository;
pub use service::RoadEventService;
