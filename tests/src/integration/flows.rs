//! # Integration Test Flows
//!
//! One user journey through the runtime handlers, backed by a single
//! `InMemoryStore`:
//!
//! 1. **Login (01)**: a signed widget claim creates the user
//! 2. **Report (02)**: the user reports an event; `events_created` grows
//! 3. **List (02)**: the event shows up with distance and author
//! 4. **Vote (02)**: a second user's vote reaches event and author counters
//! 5. **Push (03)**: subscribers near the event receive the broadcast

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::{json, Value};

    use mayak_runtime::handlers::{
        handle_list_events, handle_login, handle_push, handle_report_event, handle_vote,
    };
    use mayak_runtime::{AppConfig, ServiceContainer};
    use mk_01_auth::{compute_hash, AuthClaim, AuthConfig, UserRepository};

    const TOKEN: &str = "123456:ABC-DEF";

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn container() -> ServiceContainer {
        let config = AppConfig {
            auth: AuthConfig::new(TOKEN),
            ..AppConfig::default()
        };
        ServiceContainer::new(config).unwrap()
    }

    /// Widget payload signed with the test bot token.
    fn telegram_data(id: i64, first_name: &str) -> Value {
        let mut data = json!({
            "id": id,
            "first_name": first_name,
            "username": first_name.to_lowercase(),
            "auth_date": 1700000000
        });
        let hash = compute_hash(&AuthClaim::from_json(&data), TOKEN).unwrap();
        data["hash"] = json!(hash);
        data
    }

    async fn login(container: &ServiceContainer, telegram_id: i64, first_name: &str) -> i64 {
        let body = json!({ "telegramData": telegram_data(telegram_id, first_name) });
        let response = handle_login(container.login.as_ref(), &body).await.unwrap();
        response.body["user"]["id"].as_i64().unwrap()
    }

    fn no_params() -> HashMap<String, String> {
        HashMap::new()
    }

    // =============================================================================
    // INTEGRATION TESTS
    // =============================================================================

    #[tokio::test]
    async fn test_full_reporting_journey() {
        let container = container();
        let author = login(&container, 1001, "Ivan").await;
        let voter = login(&container, 1002, "Olga").await;

        // Report
        let report = json!({
            "user_id": author,
            "type": "accident",
            "title": "Two cars on the Garden Ring",
            "description": "Right lane blocked",
            "latitude": 55.76,
            "longitude": 37.62
        });
        let created = handle_report_event(container.events.as_ref(), &report)
            .await
            .unwrap();
        assert_eq!(created.status, 201);
        let event_id = created.body["event_id"].as_i64().unwrap();

        // List with defaults (Moscow, 59 km)
        let listed = handle_list_events(container.events.as_ref(), &no_params())
            .await
            .unwrap();
        let events = listed.body["events"].as_array().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["id"], event_id);
        assert_eq!(events[0]["distance"], 0.5);
        assert_eq!(events[0]["author"]["name"], "Ivan");
        assert_eq!(events[0]["helpful_count"], 0);

        // Vote twice, counted once
        let vote = json!({ "event_id": event_id, "user_id": voter });
        handle_vote(container.events.as_ref(), &vote).await.unwrap();
        handle_vote(container.events.as_ref(), &vote).await.unwrap();

        let listed = handle_list_events(container.events.as_ref(), &no_params())
            .await
            .unwrap();
        assert_eq!(listed.body["events"][0]["helpful_count"], 1);

        let profile = container.store.find(author).await.unwrap().unwrap();
        assert_eq!(profile.events_created, 1);
        assert_eq!(profile.helpful_reports, 1);
    }

    #[tokio::test]
    async fn test_relogin_keeps_counters() {
        let container = container();
        let user = login(&container, 2001, "Petr").await;

        let report = json!({
            "user_id": user, "type": "snow", "title": "Drifts", "latitude": 55.7, "longitude": 37.6
        });
        handle_report_event(container.events.as_ref(), &report).await.unwrap();

        let body = json!({ "telegramData": telegram_data(2001, "Pyotr") });
        let response = handle_login(container.login.as_ref(), &body).await.unwrap();

        assert_eq!(response.body["user"]["id"], user);
        assert_eq!(response.body["user"]["first_name"], "Pyotr");
        assert_eq!(response.body["user"]["events_created"], 1);
    }

    #[tokio::test]
    async fn test_far_events_are_not_listed() {
        let container = container();
        let user = login(&container, 3001, "Anna").await;

        let st_petersburg = json!({
            "user_id": user, "type": "ice", "title": "Nevsky ice", "latitude": 59.9343, "longitude": 30.3351
        });
        handle_report_event(container.events.as_ref(), &st_petersburg)
            .await
            .unwrap();

        let listed = handle_list_events(container.events.as_ref(), &no_params())
            .await
            .unwrap();
        assert!(listed.body["events"].as_array().unwrap().is_empty());

        let params: HashMap<String, String> = [("radius", "700")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let listed = handle_list_events(container.events.as_ref(), &params)
            .await
            .unwrap();
        let distance = listed.body["events"][0]["distance"].as_f64().unwrap();
        assert!((distance - 635.0).abs() <= 5.0, "got {distance}");
    }

    #[tokio::test]
    async fn test_push_broadcast_near_reported_event() {
        let container = container();
        let near = login(&container, 4001, "Near").await;
        let far = login(&container, 4002, "Far").await;

        for (user_id, endpoint, lat, lng) in [
            (near, "https://push.example/near", 55.75, 37.60),
            (far, "https://push.example/far", 59.93, 30.33),
        ] {
            let body = json!({
                "action": "subscribe",
                "user_id": user_id,
                "subscription": {
                    "endpoint": endpoint,
                    "keys": {"p256dh": "client-key", "auth": "client-auth"}
                },
                "latitude": lat,
                "longitude": lng
            });
            handle_push(container.push.as_ref(), &body).await.unwrap();
        }
        assert_eq!(container.store.subscription_count(), 2);

        let send = json!({
            "action": "send",
            "message": "Accident reported near you",
            "latitude": 55.7558,
            "longitude": 37.6173
        });
        let response = handle_push(container.push.as_ref(), &send).await.unwrap();

        assert_eq!(response.body["report"]["targeted"], 1);
        assert_eq!(response.body["report"]["delivered"], 1);
        assert_eq!(response.body["message"], "Notification sent to 1 subscribers");
    }

    #[tokio::test]
    async fn test_forged_login_creates_nobody() {
        let container = container();
        let mut data = telegram_data(5001, "Eve");
        data["id"] = json!(1);

        let error = handle_login(container.login.as_ref(), &json!({ "telegramData": data }))
            .await
            .unwrap_err();
        assert_eq!(error.status(), 401);
        assert!(container.store.find(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_metrics_exposed_after_requests() {
        mayak_telemetry::register_metrics().unwrap();
        let container = container();
        login(&container, 6001, "Mila").await;

        let text = mayak_telemetry::gather_metrics().unwrap();
        assert!(text.contains("mayak_auth_login_attempts_total"));
    }
}
