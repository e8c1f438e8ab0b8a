//! # Domain Layer
//!
//! Subscriptions, notifications and delivery accounting. No I/O.

pub mod config;
pub mod entities;
pub mod errors;
