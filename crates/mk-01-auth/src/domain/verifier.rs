//! # Signature Verifier
//!
//! Checks that a login claim was produced by Telegram for our bot.
//!
//! ## Algorithm
//!
//! ```text
//! check_string = sorted "key=value" lines (hash excluded), joined by '\n'
//! secret_key   = SHA-256(bot_token)
//! expected     = hex(HMAC-SHA256(secret_key, check_string))
//! valid        = expected == claim.hash
//! ```
//!
//! ## Security
//!
//! - Every ambiguous input (missing hash, non-scalar values, empty claim)
//!   fails verification. Nothing here returns an error or panics.
//! - The digest comparison is constant-time; the hex strings are compared
//!   byte for byte, so the match stays exact and case-sensitive.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use super::claim::AuthClaim;

type HmacSha256 = Hmac<Sha256>;

/// Derive the HMAC key from the bot token.
pub fn secret_key(shared_secret: &str) -> [u8; 32] {
    Sha256::digest(shared_secret.as_bytes()).into()
}

/// Lowercase hex HMAC of the claim's canonical check-string.
///
/// `None` when the claim has no canonical form.
pub fn compute_hash(claim: &AuthClaim, shared_secret: &str) -> Option<String> {
    let check_string = claim.check_string()?;
    let key = secret_key(shared_secret);

    let mut mac = HmacSha256::new_from_slice(&key).ok()?;
    mac.update(check_string.as_bytes());

    Some(hex::encode(mac.finalize().into_bytes()))
}

/// Verify a login claim against the bot token.
///
/// True iff the claim carries a string `hash` equal to the recomputed
/// digest.
pub fn verify(claim: &AuthClaim, shared_secret: &str) -> bool {
    let Some(claimed) = claim.hash() else {
        return false;
    };
    let Some(expected) = compute_hash(claim, shared_secret) else {
        return false;
    };

    expected.as_bytes().ct_eq(claimed.as_bytes()).into()
}
