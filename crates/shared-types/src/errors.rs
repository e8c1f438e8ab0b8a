//! # Error Types
//!
//! Errors shared across the store-facing ports of every crate.

use thiserror::Error;

/// Failure reported by a store adapter (relational database, cache, ...).
///
/// Services wrap this into their own error enums; the request layer maps
/// it to an upstream failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The store rejected the write because it violates a constraint.
    #[error("Constraint violated: {0}")]
    Constraint(String),

    /// Any other backend failure.
    #[error("Store error: {0}")]
    Backend(String),
}
