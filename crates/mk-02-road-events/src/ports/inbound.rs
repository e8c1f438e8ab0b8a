//! # Inbound Ports (Driving Ports / API)

use crate::domain::entities::{AnnotatedRecord, NearbyQuery, NewEventReport, VoteOutcome};
use crate::domain::errors::EventError;
use async_trait::async_trait;
use shared_types::{EventId, UserId};

/// Road event API.
#[async_trait]
pub trait RoadEventApi: Send + Sync {
    /// Recent active events within the query radius, newest first, each
    /// annotated with its distance from the query origin.
    async fn list_nearby(&self, query: NearbyQuery) -> Result<Vec<AnnotatedRecord>, EventError>;

    /// Store a new event and credit its author.
    ///
    /// # Errors
    /// * `EventError::Validation` - blank title or unusable coordinates
    async fn report(&self, report: NewEventReport) -> Result<EventId, EventError>;

    /// Record a helpful vote. Repeat votes by the same user are no-ops.
    ///
    /// # Errors
    /// * `EventError::NotFound` - unknown event
    async fn vote_helpful(&self, event_id: EventId, user_id: UserId)
        -> Result<VoteOutcome, EventError>;
}
