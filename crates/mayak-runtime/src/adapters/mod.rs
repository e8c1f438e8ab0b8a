//! # Adapters
//!
//! Implementations of the subsystems' outbound ports.
//!
//! - `memory` - single-process store backing every repository port
//! - `dispatcher` - push transport that records deliveries in the log

pub mod dispatcher;
pub mod memory;

pub use dispatcher::LoggingDispatcher;
pub use memory::InMemoryStore;
