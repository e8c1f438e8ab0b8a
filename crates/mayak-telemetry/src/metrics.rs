//! Prometheus metrics for the Mayak services.
//!
//! All metrics follow the naming convention: `mayak_<area>_<metric>_total`

use lazy_static::lazy_static;
use prometheus::{Counter, CounterVec, Encoder, Opts, Registry, TextEncoder};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // AUTH METRICS (mk-01)
    // =========================================================================

    /// Login attempts by outcome
    pub static ref LOGIN_ATTEMPTS: CounterVec = CounterVec::new(
        Opts::new("mayak_auth_login_attempts_total", "Telegram login attempts"),
        &["outcome"]  // outcome: success/invalid_signature/expired/invalid_claim/error
    ).expect("metric creation failed");

    /// Signature verification failures (for alerting)
    pub static ref SIGNATURE_FAILURES: Counter = Counter::new(
        "mayak_auth_signature_failures_total",
        "Telegram login claims with a bad or missing hash"
    ).expect("metric creation failed");

    // =========================================================================
    // ROAD EVENT METRICS (mk-02)
    // =========================================================================

    /// Events returned by nearby listings
    pub static ref EVENTS_LISTED: Counter = Counter::new(
        "mayak_events_listed_total",
        "Road events returned by nearby listings"
    ).expect("metric creation failed");

    /// Events reported
    pub static ref EVENTS_REPORTED: CounterVec = CounterVec::new(
        Opts::new("mayak_events_reported_total", "Road events reported"),
        &["type"]  // type: accident/ice/snow/repair/other
    ).expect("metric creation failed");

    /// Helpful votes by outcome
    pub static ref HELPFUL_VOTES: CounterVec = CounterVec::new(
        Opts::new("mayak_events_helpful_votes_total", "Helpful votes"),
        &["outcome"]  // outcome: counted/already_counted
    ).expect("metric creation failed");

    // =========================================================================
    // PUSH METRICS (mk-03)
    // =========================================================================

    /// Subscriptions saved
    pub static ref PUSH_SUBSCRIPTIONS: Counter = Counter::new(
        "mayak_push_subscriptions_total",
        "Push subscriptions saved or refreshed"
    ).expect("metric creation failed");

    /// Push deliveries by outcome
    pub static ref PUSH_DELIVERIES: CounterVec = CounterVec::new(
        Opts::new("mayak_push_deliveries_total", "Push deliveries"),
        &["outcome"]  // outcome: delivered/failed/pruned
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once; metrics already registered are skipped.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        // Auth
        Box::new(LOGIN_ATTEMPTS.clone()),
        Box::new(SIGNATURE_FAILURES.clone()),
        // Road events
        Box::new(EVENTS_LISTED.clone()),
        Box::new(EVENTS_REPORTED.clone()),
        Box::new(HELPFUL_VOTES.clone()),
        // Push
        Box::new(PUSH_SUBSCRIPTIONS.clone()),
        Box::new(PUSH_DELIVERIES.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }
    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn gather_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_metrics_twice() {
        assert!(register_metrics().is_ok());
        assert!(register_metrics().is_ok());
    }

    #[test]
    fn test_counter_increment() {
        SIGNATURE_FAILURES.inc();
        assert!(SIGNATURE_FAILURES.get() >= 1.0);
    }

    #[test]
    fn test_gather_includes_labelled_counter() {
        register_metrics().unwrap();
        PUSH_DELIVERIES.with_label_values(&["pruned"]).inc();

        let text = gather_metrics().unwrap();
        assert!(text.contains("mayak_push_deliveries_total"));
        assert!(text.contains("outcome=\"pruned\""));
    }
}
