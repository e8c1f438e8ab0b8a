//! # Core Entities
//!
//! Identity records shared between the login flow and event listing.

use serde::{Deserialize, Serialize};

/// Internal user identifier assigned by the user store.
pub type UserId = i64;

/// Road event identifier assigned by the event store.
pub type EventId = i64;

/// Telegram account identifier as reported by the login widget.
pub type TelegramId = i64;

/// Display name used when an author has neither a name nor a username.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// A registered user as returned by the login flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub telegram_id: TelegramId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub photo_url: String,
    /// Reputation score; zero until the rating job has run.
    pub rating: f64,
    /// Number of road events this user reported.
    pub events_created: u32,
    /// Number of helpful votes received on this user's events.
    pub helpful_reports: u32,
}

impl UserProfile {
    /// Public summary shown next to the user's events.
    pub fn author_summary(&self) -> AuthorSummary {
        AuthorSummary {
            name: display_name(&self.first_name, &self.last_name, &self.username),
            avatar: self.photo_url.clone(),
            rating: self.rating,
        }
    }
}

/// Author block embedded in each listed road event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub name: String,
    pub avatar: String,
    pub rating: f64,
}

impl AuthorSummary {
    /// Summary for events whose author record is gone.
    pub fn anonymous() -> Self {
        Self {
            name: ANONYMOUS_AUTHOR.to_string(),
            avatar: String::new(),
            rating: 0.0,
        }
    }
}

/// "First Last", falling back to the username, then to [`ANONYMOUS_AUTHOR`].
pub fn display_name(first_name: &str, last_name: &str, username: &str) -> String {
    let full = format!("{} {}", first_name, last_name);
    let full = full.trim();
    if !full.is_empty() {
        full.to_string()
    } else if !username.is_empty() {
        username.to_string()
    } else {
        ANONYMOUS_AUTHOR.to_string()
    }
}
