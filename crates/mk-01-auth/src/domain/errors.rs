//! # Authentication Errors
//!
//! Failures of the login flow. Signature verification itself never errors;
//! a failed check surfaces here as `InvalidSignature`.

use shared_types::StoreError;
use thiserror::Error;

/// Errors that can occur while logging a user in.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The claim's hash does not match the recomputed digest.
    #[error("Invalid Telegram authentication")]
    InvalidSignature,

    /// `auth_date` is missing or outside the accepted window.
    #[error("Telegram authentication expired (age {age_secs}s)")]
    Expired { age_secs: i64 },

    /// The claim verified but a required field is unusable.
    #[error("Invalid claim: {0}")]
    InvalidClaim(String),

    /// No bot token configured; every login would fail.
    #[error("Bot token not configured")]
    MissingBotToken,

    /// The user store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
