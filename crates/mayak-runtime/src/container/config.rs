//! # Application Configuration
//!
//! Unified configuration for every subsystem, read from the environment.
//!
//! ## Security Requirements
//!
//! - `TELEGRAM_BOT_TOKEN` MUST be set; without it no login can verify
//! - The token is held in a zeroizing wrapper and never printed

use std::env;
use std::time::Duration;

use mayak_telemetry::TelemetryConfig;
use mk_01_auth::AuthConfig;
use mk_02_road_events::ListingConfig;
use mk_03_push::PushConfig;
use shared_types::Coordinate;
use thiserror::Error;

/// Complete application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Telegram login verification.
    pub auth: AuthConfig,
    /// Nearby listing defaults.
    pub listing: ListingConfig,
    /// Broadcast defaults.
    pub push: PushConfig,
    /// Logging output.
    pub telemetry: TelemetryConfig,
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The bot token is unset or blank.
    #[error("Bot token not configured. Set the TELEGRAM_BOT_TOKEN environment variable.")]
    MissingBotToken,

    /// A variable is set but cannot be parsed.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },

    /// A radius or window that must be positive is not.
    #[error("{key} must be positive")]
    NotPositive { key: &'static str },
}

impl AppConfig {
    /// Load configuration from process environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `TELEGRAM_BOT_TOKEN`: login shared secret (required)
    /// - `MAYAK_AUTH_MAX_AGE_SECS`: reject logins older than this (default: unset)
    /// - `MAYAK_DEFAULT_LAT` / `MAYAK_DEFAULT_LNG`: listing origin (default: Moscow)
    /// - `MAYAK_DEFAULT_RADIUS_KM`: listing and broadcast radius (default: 59)
    /// - `MAYAK_EVENT_MAX_AGE_HOURS`: listing window (default: 24)
    /// - `MAYAK_LOG_LEVEL`, `MAYAK_JSON_LOGS`, `MAYAK_SERVICE_NAME`: see `TelemetryConfig`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    ///
    /// Parses but does not validate; call `validate` before use.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            telemetry: TelemetryConfig::from_lookup(&lookup),
            ..Self::default()
        };

        config.auth = AuthConfig::new(lookup("TELEGRAM_BOT_TOKEN").unwrap_or_default());
        if let Some(secs) = parse_var::<u64, _>(&lookup, "MAYAK_AUTH_MAX_AGE_SECS")? {
            config.auth = config.auth.with_max_auth_age(Duration::from_secs(secs));
        }

        let lat = parse_var::<f64, _>(&lookup, "MAYAK_DEFAULT_LAT")?;
        let lng = parse_var::<f64, _>(&lookup, "MAYAK_DEFAULT_LNG")?;
        let origin = config.listing.default_origin;
        config.listing.default_origin = Coordinate::new(
            lat.unwrap_or(origin.latitude),
            lng.unwrap_or(origin.longitude),
        );

        if let Some(radius_km) = parse_var::<f64, _>(&lookup, "MAYAK_DEFAULT_RADIUS_KM")? {
            config.listing.default_radius_km = radius_km;
            config.push.default_radius_km = radius_km;
        }

        if let Some(hours) = parse_var::<u64, _>(&lookup, "MAYAK_EVENT_MAX_AGE_HOURS")? {
            config.listing.max_event_age = Duration::from_secs(hours.saturating_mul(3600));
        }

        Ok(config)
    }

    /// Validate configuration before the services are built.
    ///
    /// # Returns
    ///
    /// Returns `Err` if:
    /// - the bot token is blank
    /// - a default radius is not a positive finite number
    /// - the listing window or the login freshness window is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.bot_token.is_empty() {
            return Err(ConfigError::MissingBotToken);
        }
        if !is_positive(self.listing.default_radius_km) || !is_positive(self.push.default_radius_km) {
            return Err(ConfigError::NotPositive {
                key: "MAYAK_DEFAULT_RADIUS_KM",
            });
        }
        if self.listing.max_event_age.is_zero() {
            return Err(ConfigError::NotPositive {
                key: "MAYAK_EVENT_MAX_AGE_HOURS",
            });
        }
        if self.auth.max_auth_age.is_some_and(|age| age.is_zero()) {
            return Err(ConfigError::NotPositive {
                key: "MAYAK_AUTH_MAX_AGE_SECS",
            });
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}
