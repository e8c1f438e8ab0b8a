//! # Domain Entities
//!
//! Values extracted from a verified claim.

use super::claim::AuthClaim;
use super::errors::AuthError;
use serde::{Deserialize, Serialize};
use shared_types::TelegramId;

/// Profile fields asserted by Telegram for one login.
///
/// Optional widget fields default to empty strings, matching what the
/// user store keeps for accounts without a username or photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramIdentity {
    pub telegram_id: TelegramId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub photo_url: String,
}

impl TelegramIdentity {
    /// Extract the identity from a claim that already passed verification.
    pub fn from_claim(claim: &AuthClaim) -> Result<Self, AuthError> {
        let telegram_id = claim
            .telegram_id()
            .ok_or_else(|| AuthError::InvalidClaim("id must be an integer".to_string()))?;

        Ok(Self {
            telegram_id,
            username: claim.text("username"),
            first_name: claim.text("first_name"),
            last_name: claim.text("last_name"),
            photo_url: claim.text("photo_url"),
        })
    }
}
