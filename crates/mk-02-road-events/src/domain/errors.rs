//! # Road Event Errors

use shared_types::{EventId, StoreError};
use thiserror::Error;

/// Errors from reporting, voting and listing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventError {
    /// The request is missing a field or carries an unusable value.
    #[error("Invalid event request: {0}")]
    Validation(String),

    /// No event with this id exists.
    #[error("Event not found: {0}")]
    NotFound(EventId),

    /// The event store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
