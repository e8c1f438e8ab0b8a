//! Broadcast configuration.

/// Notification title when the sender gives none.
pub const DEFAULT_TITLE: &str = "MAYAK";

/// Broadcast radius in kilometres when the sender gives none.
pub const DEFAULT_BROADCAST_RADIUS_KM: f64 = 59.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PushConfig {
    pub default_title: String,
    pub default_radius_km: f64,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_TITLE.to_string(),
            default_radius_km: DEFAULT_BROADCAST_RADIUS_KM,
        }
    }
}
