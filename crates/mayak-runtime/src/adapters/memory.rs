//! # In-Memory Store
//!
//! One store implementing `UserRepository`, `EventRepository` and
//! `SubscriptionStore`, for development and tests.
//!
//! ## Consistency
//!
//! All tables sit behind a single `RwLock`. Operations that touch several
//! records (report + author counter, vote + event counter + author counter)
//! run under one write guard, so readers never observe half of them.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use mk_01_auth::{TelegramIdentity, UserRepository};
use mk_02_road_events::{EventRepository, GeoRecord, NewEventReport, VoteOutcome};
use mk_03_push::{PushSubscription, SubscriptionStore};
use shared_types::{AuthorSummary, EventId, StoreError, UserId, UserProfile};

#[derive(Default)]
struct Tables {
    users: Vec<UserProfile>,
    events: Vec<GeoRecord>,
    votes: HashSet<(EventId, UserId)>,
    subscriptions: Vec<PushSubscription>,
}

impl Tables {
    fn user(&self, id: UserId) -> Option<&UserProfile> {
        self.users.iter().find(|u| u.id == id)
    }

    fn user_mut(&mut self, id: UserId) -> Option<&mut UserProfile> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    fn author_of(&self, user_id: UserId) -> AuthorSummary {
        self.user(user_id)
            .map(UserProfile::author_summary)
            .unwrap_or_else(AuthorSummary::anonymous)
    }
}

/// Process-local store with sequential ids starting at 1.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.tables.read().subscriptions.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn upsert(&self, identity: TelegramIdentity) -> Result<UserProfile, StoreError> {
        let mut tables = self.tables.write();

        if let Some(user) = tables
            .users
            .iter_mut()
            .find(|u| u.telegram_id == identity.telegram_id)
        {
            user.username = identity.username;
            user.first_name = identity.first_name;
            user.last_name = identity.last_name;
            user.photo_url = identity.photo_url;
            return Ok(user.clone());
        }

        let profile = UserProfile {
            id: tables.users.len() as UserId + 1,
            telegram_id: identity.telegram_id,
            username: identity.username,
            first_name: identity.first_name,
            last_name: identity.last_name,
            photo_url: identity.photo_url,
            rating: 0.0,
            events_created: 0,
            helpful_reports: 0,
        };
        tables.users.push(profile.clone());
        Ok(profile)
    }

    async fn find(&self, id: UserId) -> Result<Option<UserProfile>, StoreError> {
        Ok(self.tables.read().user(id).cloned())
    }
}

#[async_trait]
impl EventRepository for InMemoryStore {
    async fn recent_active(&self, since: DateTime<Utc>) -> Result<Vec<GeoRecord>, StoreError> {
        let tables = self.tables.read();
        let mut events: Vec<GeoRecord> = tables
            .events
            .iter()
            .filter(|e| e.created_at > since)
            .map(|e| GeoRecord {
                author: tables.author_of(e.author_id),
                ..e.clone()
            })
            .collect();
        // Newest first; ties keep insertion order.
        events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(events)
    }

    async fn insert(
        &self,
        report: NewEventReport,
        created_at: DateTime<Utc>,
    ) -> Result<EventId, StoreError> {
        let mut tables = self.tables.write();

        let Some(author) = tables.user_mut(report.user_id) else {
            return Err(StoreError::Constraint(format!(
                "unknown user {}",
                report.user_id
            )));
        };
        author.events_created += 1;

        let id = tables.events.len() as EventId + 1;
        tables.events.push(GeoRecord {
            id,
            kind: report.kind,
            title: report.title,
            description: report.description,
            latitude: report.latitude,
            longitude: report.longitude,
            helpful_count: 0,
            created_at,
            author_id: report.user_id,
            author: AuthorSummary::anonymous(),
        });
        Ok(id)
    }

    async fn record_vote(
        &self,
        event_id: EventId,
        user_id: UserId,
    ) -> Result<Option<VoteOutcome>, StoreError> {
        let mut tables = self.tables.write();

        let Some(author_id) = tables
            .events
            .iter()
            .find(|e| e.id == event_id)
            .map(|e| e.author_id)
        else {
            return Ok(None);
        };

        if !tables.votes.insert((event_id, user_id)) {
            return Ok(Some(VoteOutcome::AlreadyCounted));
        }
        if let Some(event) = tables.events.iter_mut().find(|e| e.id == event_id) {
            event.helpful_count += 1;
        }
        if let Some(author) = tables.user_mut(author_id) {
            author.helpful_reports += 1;
        }
        Ok(Some(VoteOutcome::Counted))
    }
}

#[async_trait]
impl SubscriptionStore for InMemoryStore {
    async fn upsert(&self, subscription: PushSubscription) -> Result<(), StoreError> {
        let mut tables = self.tables.write();

        match tables
            .subscriptions
            .iter_mut()
            .find(|s| s.user_id == subscription.user_id && s.endpoint == subscription.endpoint)
        {
            Some(existing) => {
                existing.keys = subscription.keys;
                if subscription.location.is_some() {
                    existing.location = subscription.location;
                }
            }
            None => tables.subscriptions.push(subscription),
        }
        Ok(())
    }

    async fn all(&self) -> Result<Vec<PushSubscription>, StoreError> {
        Ok(self.tables.read().subscriptions.clone())
    }

    async fn remove(&self, user_id: UserId, endpoint: &str) -> Result<bool, StoreError> {
        let mut tables = self.tables.write();
        let before = tables.subscriptions.len();
        tables
            .subscriptions
            .retain(|s| !(s.user_id == user_id && s.endpoint == endpoint));
        Ok(tables.subscriptions.len() != before)
    }
}
