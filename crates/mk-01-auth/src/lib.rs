//! # Login Verification (MK-01)
//!
//! Telegram login widget verification and user onboarding.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): claim canonicalization and HMAC
//!   verification, no I/O
//! - **Ports Layer** (`ports/`): `LoginApi` inbound, `UserRepository` outbound
//! - **Service Layer** (`service.rs`): wires verification to the user store
//!
//! ## Security Notes
//!
//! - Verification is total: malformed claims fail, they never error
//! - The bot token is zeroized on drop and redacted from `Debug`
//! - Claim hashes and tokens are never logged

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::claim::{AuthClaim, HASH_FIELD};
pub use domain::config::{AuthConfig, BotToken};
pub use domain::entities::TelegramIdentity;
pub use domain::errors::AuthError;
pub use domain::verifier::{compute_hash, secret_key, verify};
pub use ports::inbound::LoginApi;
pub use ports::outbound::UserRepository;
pub use service::LoginService;
