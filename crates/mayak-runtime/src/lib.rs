//! # Mayak Runtime Library
//!
//! Composition root for the Mayak backend.
//!
//! - `container` - configuration and the wired services
//! - `adapters` - in-memory store and logging push transport
//! - `handlers` - transport-neutral request handlers
//!
//! ## Architectural Patterns
//!
//! - **Hexagonal Architecture**: subsystems define ports, this crate plugs
//!   adapters into them
//! - **Explicit configuration**: every setting flows from `AppConfig` into
//!   constructors; no subsystem reads the environment

pub mod adapters;
pub mod container;
pub mod handlers;

pub use container::{AppConfig, ConfigError, ServiceContainer};
pub use handlers::{ApiError, HandlerResponse};
