//! # Push Errors

use shared_types::StoreError;
use thiserror::Error;

/// Errors from subscribing and broadcasting.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PushError {
    /// Missing or blank request field.
    #[error("Invalid push request: {0}")]
    Validation(String),

    /// The subscription store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failure delivering to a single subscription.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// The push service reports the subscription no longer exists
    /// (HTTP 404/410). The subscription should be dropped.
    #[error("Subscription gone")]
    Gone,

    /// The push service refused the message.
    #[error("Push rejected: {0}")]
    Rejected(String),

    /// The push service could not be reached.
    #[error("Push transport error: {0}")]
    Transport(String),
}
