//! # Service Container
//!
//! Application configuration plus the wired service instances.

pub mod config;
pub mod services;

pub use config::{AppConfig, ConfigError};
pub use services::ServiceContainer;
