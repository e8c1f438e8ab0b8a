//! # Domain Layer
//!
//! Road event entities, listing configuration and the proximity filter.
//! Pure logic, no I/O.

pub mod config;
pub mod entities;
pub mod errors;
pub mod proximity;
