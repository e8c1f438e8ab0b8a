//! Road event handlers: nearby listing, report and helpful vote.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{json, Value};

use mayak_telemetry::{metric_inc, EVENTS_LISTED, EVENTS_REPORTED, HELPFUL_VOTES};
use mk_02_road_events::{NearbyQuery, NewEventReport, RoadEventApi, VoteOutcome};
use shared_types::{Coordinate, EventId, UserId};

use super::{ApiError, HandlerResponse};

/// `GET /events?lat=..&lng=..&radius=..`
///
/// All three parameters are optional. `lat` and `lng` must be given
/// together; anything that does not parse as a number is a 400.
pub async fn handle_list_events(
    api: &dyn RoadEventApi,
    params: &HashMap<String, String>,
) -> Result<HandlerResponse, ApiError> {
    let query = nearby_query(params)?;
    let events = api.list_nearby(query).await?;

    EVENTS_LISTED.inc_by(events.len() as f64);
    Ok(HandlerResponse::ok(json!({ "events": events })))
}

/// `POST /events` with a `NewEventReport` body. Responds 201.
pub async fn handle_report_event(
    api: &dyn RoadEventApi,
    body: &Value,
) -> Result<HandlerResponse, ApiError> {
    let report: NewEventReport = serde_json::from_value(body.clone())
        .map_err(|e| ApiError::Validation(format!("Missing required fields: {e}")))?;
    let kind = report.kind;

    let event_id = api.report(report).await?;

    metric_inc!(EVENTS_REPORTED, &[kind.as_str()]);
    Ok(HandlerResponse::created(
        json!({ "success": true, "event_id": event_id }),
    ))
}

#[derive(Debug, Deserialize)]
struct VoteRequest {
    event_id: EventId,
    user_id: UserId,
}

/// `PUT /events` with `{"event_id": n, "user_id": n}`.
///
/// A repeat vote still succeeds; it just changes nothing.
pub async fn handle_vote(api: &dyn RoadEventApi, body: &Value) -> Result<HandlerResponse, ApiError> {
    let request: VoteRequest = serde_json::from_value(body.clone())
        .map_err(|_| ApiError::Validation("Missing event_id or user_id".to_string()))?;

    let outcome = api.vote_helpful(request.event_id, request.user_id).await?;

    let label = match outcome {
        VoteOutcome::Counted => "counted",
        VoteOutcome::AlreadyCounted => "already_counted",
    };
    metric_inc!(HELPFUL_VOTES, &[label]);
    Ok(HandlerResponse::ok(json!({ "success": true })))
}

fn nearby_query(params: &HashMap<String, String>) -> Result<NearbyQuery, ApiError> {
    let lat = number_param(params, "lat")?;
    let lng = number_param(params, "lng")?;
    let radius_km = number_param(params, "radius")?;

    let origin = match (lat, lng) {
        (Some(latitude), Some(longitude)) => Some(Coordinate::new(latitude, longitude)),
        (None, None) => None,
        _ => {
            return Err(ApiError::Validation(
                "lat and lng must be given together".to_string(),
            ))
        }
    };

    Ok(NearbyQuery { origin, radius_km })
}

fn number_param(params: &HashMap<String, String>, key: &str) -> Result<Option<f64>, ApiError> {
    params
        .get(key)
        .map(|raw| {
            raw.trim()
                .parse::<f64>()
                .map_err(|_| ApiError::Validation(format!("{key} must be a number, got '{raw}'")))
        })
        .transpose()
}
