//! Listing configuration.

use shared_types::Coordinate;
use std::time::Duration;

/// Moscow city centre, the fallback origin when a client sends none.
pub const DEFAULT_ORIGIN: Coordinate = Coordinate::new(55.7558, 37.6173);

/// Fallback search radius in kilometres.
pub const DEFAULT_RADIUS_KM: f64 = 59.0;

/// Only events younger than this are listed.
pub const DEFAULT_MAX_EVENT_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// Listing defaults and window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListingConfig {
    pub default_origin: Coordinate,
    pub default_radius_km: f64,
    pub max_event_age: Duration,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_origin: DEFAULT_ORIGIN,
            default_radius_km: DEFAULT_RADIUS_KM,
            max_event_age: DEFAULT_MAX_EVENT_AGE,
        }
    }
}
