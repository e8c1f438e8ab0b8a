//! # Domain Entities
//!
//! Road events as stored, as listed, and as reported.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::{AuthorSummary, Coordinate, EventId, UserId};
use std::fmt;
use std::str::FromStr;

/// Category tag of a road event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Accident,
    Ice,
    Snow,
    Repair,
    Other,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::Accident,
        EventKind::Ice,
        EventKind::Snow,
        EventKind::Repair,
        EventKind::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Accident => "accident",
            EventKind::Ice => "ice",
            EventKind::Snow => "snow",
            EventKind::Repair => "repair",
            EventKind::Other => "other",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown event category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEventKind(pub String);

impl fmt::Display for UnknownEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown event type '{}'", self.0)
    }
}

impl std::error::Error for UnknownEventKind {}

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEventKind(s.to_string()))
    }
}

/// Anything with a position the proximity filter can measure.
pub trait Located {
    fn coordinate(&self) -> Coordinate;
}

impl Located for Coordinate {
    fn coordinate(&self) -> Coordinate {
        *self
    }
}

/// A reported incident as read from the event store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoRecord {
    pub id: EventId,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub title: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub helpful_count: u32,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Owning user; internal, not part of the listing payload.
    #[serde(skip_serializing, default)]
    pub author_id: UserId,
    pub author: AuthorSummary,
}

impl Located for GeoRecord {
    fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// A record retained by the proximity filter, with its distance from the
/// query origin in kilometres (one decimal place).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithDistance<T> {
    #[serde(flatten)]
    pub record: T,
    pub distance: f64,
}

/// A listed road event.
pub type AnnotatedRecord = WithDistance<GeoRecord>;

/// Listing request. Missing fields fall back to `ListingConfig`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NearbyQuery {
    pub origin: Option<Coordinate>,
    pub radius_km: Option<f64>,
}

impl NearbyQuery {
    pub fn around(origin: Coordinate, radius_km: f64) -> Self {
        Self {
            origin: Some(origin),
            radius_km: Some(radius_km),
        }
    }
}

/// A new incident submitted by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEventReport {
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Located for NewEventReport {
    fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Result of a helpful vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteOutcome {
    /// First vote by this user; counters were incremented.
    Counted,
    /// The user had already voted for this event; nothing changed.
    AlreadyCounted,
}
