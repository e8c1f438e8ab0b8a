//! # Login Service
//!
//! Application service implementing `LoginApi`.
//!
//! ## Flow
//!
//! 1. Verify the claim signature against the bot token
//! 2. Optionally check `auth_date` freshness
//! 3. Extract the Telegram identity
//! 4. Upsert the user through the `UserRepository` port

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_types::UserProfile;
use tracing::{debug, info, warn};

use crate::domain::claim::AuthClaim;
use crate::domain::config::AuthConfig;
use crate::domain::entities::TelegramIdentity;
use crate::domain::errors::AuthError;
use crate::domain::verifier;
use crate::ports::inbound::LoginApi;
use crate::ports::outbound::UserRepository;

/// Login service.
pub struct LoginService<R: UserRepository> {
    config: AuthConfig,
    users: Arc<R>,
}

impl<R: UserRepository> LoginService<R> {
    /// Create a new login service.
    ///
    /// # Errors
    /// * `AuthError::MissingBotToken` - the token is empty, so no claim
    ///   could ever verify
    pub fn new(config: AuthConfig, users: Arc<R>) -> Result<Self, AuthError> {
        if config.bot_token.is_empty() {
            return Err(AuthError::MissingBotToken);
        }
        Ok(Self { config, users })
    }

    /// `login` with an explicit clock, for the freshness check.
    pub async fn login_at(
        &self,
        claim: &AuthClaim,
        now: DateTime<Utc>,
    ) -> Result<UserProfile, AuthError> {
        if !verifier::verify(claim, self.config.bot_token.expose()) {
            warn!(fields = claim.len(), "[mk-01] Telegram signature rejected");
            return Err(AuthError::InvalidSignature);
        }

        self.check_freshness(claim, now)?;

        let identity = TelegramIdentity::from_claim(claim)?;
        debug!(telegram_id = identity.telegram_id, "[mk-01] Claim verified");

        let profile = self.users.upsert(identity).await?;
        info!(
            user_id = profile.id,
            telegram_id = profile.telegram_id,
            "[mk-01] User logged in"
        );

        Ok(profile)
    }

    fn check_freshness(&self, claim: &AuthClaim, now: DateTime<Utc>) -> Result<(), AuthError> {
        let Some(max_age) = self.config.max_auth_age else {
            return Ok(());
        };

        let auth_date = claim
            .auth_date()
            .ok_or_else(|| AuthError::InvalidClaim("auth_date is required".to_string()))?;
        let age_secs = now.timestamp().saturating_sub(auth_date);
        let max_age_secs = i64::try_from(max_age.as_secs()).unwrap_or(i64::MAX);
        let max_skew_secs = i64::try_from(self.config.max_clock_skew.as_secs()).unwrap_or(i64::MAX);

        if age_secs > max_age_secs || age_secs < -max_skew_secs {
            warn!(age_secs, "[mk-01] Stale Telegram login rejected");
            return Err(AuthError::Expired { age_secs });
        }
        Ok(())
    }
}

#[async_trait]
impl<R: UserRepository> LoginApi for LoginService<R> {
    async fn login(&self, claim: &AuthClaim) -> Result<UserProfile, AuthError> {
        self.login_at(claim, Utc::now()).await
    }
}

// =============================================================================
// TESTS
// =============================================================================
