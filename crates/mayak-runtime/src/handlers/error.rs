//! API error taxonomy and its HTTP status mapping.

use serde_json::{json, Value};
use thiserror::Error;
use tracing::error;

use mk_01_auth::AuthError;
use mk_02_road_events::EventError;
use mk_03_push::PushError;
use shared_types::StoreError;

use super::HandlerResponse;

/// Error returned by every handler.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed or incomplete request (400).
    #[error("{0}")]
    Validation(String),

    /// Login claim rejected (401).
    #[error("{0}")]
    Unauthorized(String),

    /// Referenced record does not exist (404).
    #[error("{0}")]
    NotFound(String),

    /// A store or push service failed (502).
    #[error("{0}")]
    Upstream(String),

    /// The server is missing required configuration (500).
    #[error("{0}")]
    Configuration(String),
}

impl ApiError {
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::Unauthorized(_) => 401,
            ApiError::NotFound(_) => 404,
            ApiError::Upstream(_) => 502,
            ApiError::Configuration(_) => 500,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({ "error": self.to_string() })
    }

    pub fn into_response(self) -> HandlerResponse {
        if matches!(self, ApiError::Upstream(_) | ApiError::Configuration(_)) {
            error!(status = self.status(), error = %self, "[handlers] Request failed");
        }
        HandlerResponse {
            status: self.status(),
            body: self.to_json(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            // Writes referencing unknown rows are the caller's mistake.
            StoreError::Constraint(_) => ApiError::Validation(err.to_string()),
            StoreError::Unavailable(_) | StoreError::Backend(_) => {
                ApiError::Upstream(err.to_string())
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidSignature | AuthError::Expired { .. } => {
                ApiError::Unauthorized(err.to_string())
            }
            AuthError::InvalidClaim(_) => ApiError::Validation(err.to_string()),
            AuthError::MissingBotToken => ApiError::Configuration(err.to_string()),
            AuthError::Store(store) => store.into(),
        }
    }
}

impl From<EventError> for ApiError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::Validation(_) => ApiError::Validation(err.to_string()),
            EventError::NotFound(_) => ApiError::NotFound(err.to_string()),
            EventError::Store(store) => store.into(),
        }
    }
}

impl From<PushError> for ApiError {
    fn from(err: PushError) -> Self {
        match err {
            PushError::Validation(_) => ApiError::Validation(err.to_string()),
            PushError::Store(store) => store.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ApiError::from(AuthError::InvalidSignature), 401),
            (ApiError::from(AuthError::Expired { age_secs: 90_000 }), 401),
            (ApiError::from(AuthError::InvalidClaim("id".to_string())), 400),
            (ApiError::from(AuthError::MissingBotToken), 500),
            (ApiError::from(EventError::Validation("title".to_string())), 400),
            (ApiError::from(EventError::NotFound(9)), 404),
            (ApiError::from(PushError::Validation("message".to_string())), 400),
            (
                ApiError::from(PushError::Store(StoreError::Unavailable("down".to_string()))),
                502,
            ),
            (
                ApiError::from(EventError::Store(StoreError::Constraint("user".to_string()))),
                400,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(error.status(), status, "{error:?}");
        }
    }

    #[test]
    fn test_error_body() {
        let error = ApiError::from(AuthError::InvalidSignature);
        assert_eq!(
            error.to_json(),
            json!({"error": "Invalid Telegram authentication"})
        );

        let response = error.into_response();
        assert_eq!(response.status, 401);
        assert_eq!(response.body["error"], "Invalid Telegram authentication");
    }
}
