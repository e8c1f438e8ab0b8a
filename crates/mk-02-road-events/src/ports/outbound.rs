//! # Outbound Ports (Driven Ports / SPI)

use crate::domain::entities::{GeoRecord, NewEventReport, VoteOutcome};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_types::{EventId, StoreError, UserId};

/// Persistent event store.
///
/// Multi-record writes (`insert`, `record_vote`) must be atomic: either
/// every counter moves or none does.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Active events created after `since`, ordered by creation time,
    /// newest first, with their author summary joined in.
    async fn recent_active(&self, since: DateTime<Utc>) -> Result<Vec<GeoRecord>, StoreError>;

    /// Store a new event and increment the author's `events_created`.
    ///
    /// Fails with `StoreError::Constraint` when the author does not exist.
    async fn insert(
        &self,
        report: NewEventReport,
        created_at: DateTime<Utc>,
    ) -> Result<EventId, StoreError>;

    /// Record a vote once per (event, user). On the first vote, increment
    /// the event's `helpful_count` and its author's `helpful_reports`.
    ///
    /// `Ok(None)` when the event does not exist.
    async fn record_vote(
        &self,
        event_id: EventId,
        user_id: UserId,
    ) -> Result<Option<VoteOutcome>, StoreError>;
}
