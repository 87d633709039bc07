//! Auth route: shared-password check at `/auth-login`.
//!
//! Stateless. A successful response is the only artifact; the client is
//! responsible for remembering it.

use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::response::{IntoResponse, Json, Response};

use crate::services::auth::{self as auth_svc, AuthError, LOGIN_SUCCESS_MESSAGE};
use crate::state::AppState;

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match &self {
            Self::Internal(detail) => tracing::error!(error = %detail, "auth-login failed"),
            Self::InvalidPassword => tracing::info!("auth-login rejected"),
            Self::MissingPassword | Self::MethodNotAllowed => {}
        }
        let body = serde_json::json!({ "error": self.public_message() });
        (self.status(), Json(body)).into_response()
    }
}

/// `POST /auth-login`: compare `{"password": ...}` against the shared secret.
pub async fn login(State(state): State<AppState>, body: Result<Bytes, BytesRejection>) -> Response {
    let body = match body {
        Ok(b) => b,
        Err(e) => return AuthError::Internal(e.to_string()).into_response(),
    };

    match auth_svc::verify_login_body(&state.secret, &body) {
        Ok(()) => {
            tracing::info!("auth-login accepted");
            Json(serde_json::json!({ "success": true, "message": LOGIN_SUCCESS_MESSAGE })).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Any other verb on `/auth-login`.
pub async fn method_not_allowed() -> Response {
    AuthError::MethodNotAllowed.into_response()
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
