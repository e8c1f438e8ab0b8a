//! Login configuration.

use std::time::Duration;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Default tolerance for `auth_date` values slightly in the future.
pub const DEFAULT_MAX_CLOCK_SKEW: Duration = Duration::from_secs(30);

/// Telegram bot token, the shared secret for login verification.
///
/// Zeroized on drop and never printed.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct BotToken(String);

impl BotToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token (use immediately, do not store or log).
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Debug for BotToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BotToken(***)")
    }
}

/// Configuration for the login service.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// Shared secret issued by @BotFather.
    pub bot_token: BotToken,
    /// Reject claims whose `auth_date` is older than this. `None` disables
    /// the check.
    pub max_auth_age: Option<Duration>,
    /// How far in the future `auth_date` may be before it is rejected.
    pub max_clock_skew: Duration,
}

impl AuthConfig {
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: BotToken::new(bot_token),
            max_auth_age: None,
            max_clock_skew: DEFAULT_MAX_CLOCK_SKEW,
        }
    }

    /// Enable the `auth_date` freshness check.
    pub fn with_max_auth_age(mut self, max_age: Duration) -> Self {
        self.max_auth_age = Some(max_age);
        self
    }
}
