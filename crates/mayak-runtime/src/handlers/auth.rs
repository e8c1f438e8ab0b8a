//! Login handler.

use serde_json::{json, Value};
use tracing::debug;

use mayak_telemetry::{metric_inc, LOGIN_ATTEMPTS, SIGNATURE_FAILURES};
use mk_01_auth::{AuthClaim, AuthError, LoginApi};

use super::{ApiError, HandlerResponse};

/// `POST /auth` with body `{"telegramData": {...widget fields...}}`.
///
/// A missing or non-object `telegramData` is treated as an empty claim and
/// fails verification.
pub async fn handle_login(api: &dyn LoginApi, body: &Value) -> Result<HandlerResponse, ApiError> {
    let claim = AuthClaim::from_json(body.get("telegramData").unwrap_or(&Value::Null));

    match api.login(&claim).await {
        Ok(user) => {
            metric_inc!(LOGIN_ATTEMPTS, &["success"]);
            debug!(user_id = user.id, "[handlers] Login succeeded");
            Ok(HandlerResponse::ok(json!({ "success": true, "user": user })))
        }
        Err(err) => {
            metric_inc!(LOGIN_ATTEMPTS, &[outcome_label(&err)]);
            if err == AuthError::InvalidSignature {
                metric_inc!(SIGNATURE_FAILURES);
            }
            Err(err.into())
        }
    }
}

fn outcome_label(err: &AuthError) -> &'static str {
    match err {
        AuthError::InvalidSignature => "invalid_signature",
        AuthError::Expired { .. } => "expired",
        AuthError::InvalidClaim(_) => "invalid_claim",
        AuthError::MissingBotToken | AuthError::Store(_) => "error",
    }
}
