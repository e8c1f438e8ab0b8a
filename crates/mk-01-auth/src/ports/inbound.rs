//! # Inbound Ports (Driving Ports / API)

use crate::domain::claim::AuthClaim;
use crate::domain::errors::AuthError;
use async_trait::async_trait;
use shared_types::UserProfile;

/// Login API.
///
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait LoginApi: Send + Sync {
    /// Verify a Telegram login claim and return the stored profile,
    /// creating it on first login.
    ///
    /// # Errors
    /// * `AuthError::InvalidSignature` - hash missing or wrong
    /// * `AuthError::Expired` - `auth_date` outside the configured window
    /// * `AuthError::InvalidClaim` - verified claim has no integer `id`
    /// * `AuthError::Store` - the user store failed
    async fn login(&self, claim: &AuthClaim) -> Result<UserProfile, AuthError>;
}
