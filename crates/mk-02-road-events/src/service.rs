//! # Road Event Service
//!
//! Application service implementing `RoadEventApi`.
//!
//! ## Architecture
//!
//! - Implements the inbound port (`RoadEventApi`)
//! - Reads and writes through the outbound port (`EventRepository`)
//! - Delegates distance filtering to `domain::proximity`

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_types::{EventId, UserId};
use tracing::{debug, info};

use crate::domain::config::ListingConfig;
use crate::domain::entities::{AnnotatedRecord, NearbyQuery, NewEventReport, VoteOutcome};
use crate::domain::errors::EventError;
use crate::domain::proximity::filter_by_radius;
use crate::ports::inbound::RoadEventApi;
use crate::ports::outbound::EventRepository;

/// Road event service.
pub struct RoadEventService<E: EventRepository> {
    config: ListingConfig,
    events: Arc<E>,
}

impl<E: EventRepository> RoadEventService<E> {
    pub fn new(config: ListingConfig, events: Arc<E>) -> Self {
        Self { config, events }
    }

    pub fn config(&self) -> &ListingConfig {
        &self.config
    }

    /// `list_nearby` with an explicit clock.
    pub async fn list_nearby_at(
        &self,
        query: NearbyQuery,
        now: DateTime<Utc>,
    ) -> Result<Vec<AnnotatedRecord>, EventError> {
        let origin = query.origin.unwrap_or(self.config.default_origin);
        let radius_km = query.radius_km.unwrap_or(self.config.default_radius_km);
        let since = window_start(now, self.config.max_event_age);

        let candidates = self.events.recent_active(since).await?;
        let total = candidates.len();
        let nearby = filter_by_radius(origin, radius_km, candidates);

        debug!(
            lat = origin.latitude,
            lng = origin.longitude,
            radius_km,
            candidates = total,
            kept = nearby.len(),
            "[mk-02] Nearby events listed"
        );

        Ok(nearby)
    }

    /// `report` with an explicit clock.
    pub async fn report_at(
        &self,
        report: NewEventReport,
        now: DateTime<Utc>,
    ) -> Result<EventId, EventError> {
        validate_report(&report)?;

        let user_id = report.user_id;
        let kind = report.kind;
        let event_id = self.events.insert(report, now).await?;

        info!(event_id, user_id, %kind, "[mk-02] Road event reported");
        Ok(event_id)
    }
}

#[async_trait]
impl<E: EventRepository> RoadEventApi for RoadEventService<E> {
    async fn list_nearby(&self, query: NearbyQuery) -> Result<Vec<AnnotatedRecord>, EventError> {
        self.list_nearby_at(query, Utc::now()).await
    }

    async fn report(&self, report: NewEventReport) -> Result<EventId, EventError> {
        self.report_at(report, Utc::now()).await
    }

    async fn vote_helpful(
        &self,
        event_id: EventId,
        user_id: UserId,
    ) -> Result<VoteOutcome, EventError> {
        let outcome = self
            .events
            .record_vote(event_id, user_id)
            .await?
            .ok_or(EventError::NotFound(event_id))?;

        debug!(event_id, user_id, ?outcome, "[mk-02] Helpful vote recorded");
        Ok(outcome)
    }
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Oldest creation time still inside the listing window.
fn window_start(now: DateTime<Utc>, max_age: std::time::Duration) -> DateTime<Utc> {
    chrono::Duration::from_std(max_age)
        .ok()
        .and_then(|age| now.checked_sub_signed(age))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn validate_report(report: &NewEventReport) -> Result<(), EventError> {
    if report.title.trim().is_empty() {
        return Err(EventError::Validation("title is required".to_string()));
    }
    if !report.latitude.is_finite() || !(-90.0..=90.0).contains(&report.latitude) {
        return Err(EventError::Validation(format!(
            "latitude out of range: {}",
            report.latitude
        )));
    }
    if !report.longitude.is_finite() || !(-180.0..=180.0).contains(&report.longitude) {
        return Err(EventError::Validation(format!(
            "longitude out of range: {}",
            report.longitude
        )));
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
