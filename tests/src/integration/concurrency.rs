//! # Concurrent Access
//!
//! Parallel requests against one container must not lose counter updates.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mayak_runtime::{AppConfig, ServiceContainer};
    use mk_01_auth::{AuthConfig, TelegramIdentity, UserRepository};
    use mk_02_road_events::{EventKind, NearbyQuery, NewEventReport, RoadEventApi, VoteOutcome};

    fn identity(telegram_id: i64) -> TelegramIdentity {
        TelegramIdentity {
            telegram_id,
            username: format!("user{telegram_id}"),
            first_name: String::new(),
            last_name: String::new(),
            photo_url: String::new(),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_parallel_votes_count_each_user_once() {
        let config = AppConfig {
            auth: AuthConfig::new("123456:ABC-DEF"),
            ..AppConfig::default()
        };
        let container = ServiceContainer::new(config).unwrap();

        let author = container.store.upsert(identity(1)).await.unwrap();
        let event_id = container
            .events
            .report(NewEventReport {
                user_id: author.id,
                kind: EventKind::Repair,
                title: "Road works".to_string(),
                description: String::new(),
                latitude: 55.7558,
                longitude: 37.6173,
            })
            .await
            .unwrap();

        let mut voters = Vec::new();
        for telegram_id in 100..150 {
            voters.push(container.store.upsert(identity(telegram_id)).await.unwrap().id);
        }

        // Every voter votes twice, concurrently.
        let mut handles = Vec::new();
        for voter in voters.iter().chain(voters.iter()).copied() {
            let events = Arc::clone(&container.events);
            handles.push(tokio::spawn(async move {
                events.vote_helpful(event_id, voter).await
            }));
        }

        let mut counted = 0;
        for handle in handles {
            if handle.await.unwrap().unwrap() == VoteOutcome::Counted {
                counted += 1;
            }
        }
        assert_eq!(counted, voters.len());

        let listed = container.events.list_nearby(NearbyQuery::default()).await.unwrap();
        assert_eq!(listed[0].record.helpful_count as usize, voters.len());
        let author = container.store.find(author.id).await.unwrap().unwrap();
        assert_eq!(author.helpful_reports as usize, voters.len());
    }
}
