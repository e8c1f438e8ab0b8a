//! # Mayak Telemetry
//!
//! Logging and metrics shared by the Mayak services.
//!
//! ## Components
//!
//! - Structured logs through `tracing-subscriber` (pretty or JSON)
//! - Prometheus counters in a dedicated registry
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mayak_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     init_telemetry(&TelemetryConfig::from_env()).expect("Failed to init telemetry");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MAYAK_SERVICE_NAME` | `mayak` | Service name on every log line |
//! | `MAYAK_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `MAYAK_JSON_LOGS` | `true` in containers | JSON instead of pretty output |

mod config;
mod logging;
mod metrics;

pub use config::TelemetryConfig;
pub use logging::init_logging;
pub use metrics::{
    gather_metrics, register_metrics, EVENTS_LISTED, EVENTS_REPORTED, HELPFUL_VOTES,
    LOGIN_ATTEMPTS, PUSH_DELIVERIES, PUSH_SUBSCRIPTIONS, REGISTRY, SIGNATURE_FAILURES,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),
}

/// Register metrics, then install the global log subscriber.
///
/// Call once at startup. A second call fails with `LoggingInit` because a
/// global subscriber is already set.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    register_metrics()?;
    init_logging(config)?;

    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Telemetry initialized"
    );
    Ok(())
}

/// Increment a counter, optionally by label values.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}
