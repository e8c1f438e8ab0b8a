//! # Request Handlers
//!
//! Transport-neutral entry points. Each takes a decoded JSON body (or query
//! map) plus the inbound port it drives, and returns a status code with a
//! JSON body. Errors render as `{"error": message}`.
//!
//! | Handler | Success |
//! |---------|---------|
//! | `handle_login` | 200 `{"success": true, "user": {...}}` |
//! | `handle_list_events` | 200 `{"events": [...]}` |
//! | `handle_report_event` | 201 `{"success": true, "event_id": n}` |
//! | `handle_vote` | 200 `{"success": true}` |
//! | `handle_push` | 200 `{"success": true, "message": "..."}` |

pub mod auth;
pub mod error;
pub mod events;
pub mod push;

pub use auth::handle_login;
pub use error::ApiError;
pub use events::{handle_list_events, handle_report_event, handle_vote};
pub use push::handle_push;

use serde_json::Value;

/// Status code and JSON body of a handled request.
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerResponse {
    pub status: u16,
    pub body: Value,
}

impl HandlerResponse {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    pub fn created(body: Value) -> Self {
        Self { status: 201, body }
    }

    /// Collapse a handler result into the response to send.
    pub fn from_result(result: Result<HandlerResponse, ApiError>) -> Self {
        result.unwrap_or_else(|error| error.into_response())
    }
}
