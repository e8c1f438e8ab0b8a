//! # Domain Layer
//!
//! Claim canonicalization and signature verification. Pure logic, no I/O.

pub mod claim;
pub mod config;
pub mod entities;
pub mod errors;
pub mod verifier;
