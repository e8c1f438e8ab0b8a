//! Push handler: `subscribe` and `send` actions on one endpoint.

use serde::Deserialize;
use serde_json::{json, Value};

use mayak_telemetry::{PUSH_DELIVERIES, PUSH_SUBSCRIPTIONS};
use mk_03_push::{Notification, PushApi, PushSubscription, SubscriptionKeys};
use shared_types::{Coordinate, UserId};

use super::{ApiError, HandlerResponse};

#[derive(Debug, Deserialize)]
struct SubscriptionBody {
    endpoint: String,
    keys: SubscriptionKeys,
}

#[derive(Debug, Deserialize)]
struct SubscribeRequest {
    user_id: UserId,
    subscription: SubscriptionBody,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct SendRequest {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    radius: Option<f64>,
}

/// `POST /push` with `{"action": "subscribe" | "send", ...}`.
pub async fn handle_push(api: &dyn PushApi, body: &Value) -> Result<HandlerResponse, ApiError> {
    match body.get("action").and_then(Value::as_str) {
        Some("subscribe") => subscribe(api, body).await,
        Some("send") => send(api, body).await,
        _ => Err(ApiError::Validation("Invalid action".to_string())),
    }
}

async fn subscribe(api: &dyn PushApi, body: &Value) -> Result<HandlerResponse, ApiError> {
    let request: SubscribeRequest = serde_json::from_value(body.clone())
        .map_err(|_| ApiError::Validation("Missing required fields".to_string()))?;

    let location = location_pair(request.latitude, request.longitude)?;
    api.subscribe(PushSubscription {
        user_id: request.user_id,
        endpoint: request.subscription.endpoint,
        keys: request.subscription.keys,
        location,
    })
    .await?;

    PUSH_SUBSCRIPTIONS.inc();
    Ok(HandlerResponse::ok(json!({
        "success": true,
        "message": "Subscribed to push notifications"
    })))
}

async fn send(api: &dyn PushApi, body: &Value) -> Result<HandlerResponse, ApiError> {
    let request: SendRequest = serde_json::from_value(body.clone())
        .map_err(|e| ApiError::Validation(format!("Invalid send request: {e}")))?;

    let message = request
        .message
        .filter(|message| !message.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("Message is required".to_string()))?;

    let notification = Notification {
        title: request.title,
        message,
        origin: location_pair(request.latitude, request.longitude)?,
        radius_km: request.radius,
    };
    let report = api.broadcast(notification).await?;

    for (outcome, count) in [
        ("delivered", report.delivered),
        ("failed", report.failed),
        ("pruned", report.pruned),
    ] {
        PUSH_DELIVERIES
            .with_label_values(&[outcome])
            .inc_by(count as f64);
    }

    Ok(HandlerResponse::ok(json!({
        "success": true,
        "message": format!("Notification sent to {} subscribers", report.delivered),
        "report": report
    })))
}

/// Latitude and longitude arrive together or not at all.
fn location_pair(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<Option<Coordinate>, ApiError> {
    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Ok(Some(Coordinate::new(latitude, longitude))),
        (None, None) => Ok(None),
        _ => Err(ApiError::Validation(
            "latitude and longitude must be given together".to_string(),
        )),
    }
}
