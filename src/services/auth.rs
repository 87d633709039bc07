//! Shared-secret verification behind `POST /auth-login`.
//!
//! DESIGN
//! ======
//! Verification is a pure predicate over the raw request body: no session is
//! created and nothing is persisted. Both the candidate and the configured
//! secret are hashed with SHA-256 and the digests compared in constant time,
//! so neither content nor length is observable through response timing.

use axum::http::StatusCode;
use serde_json::Value;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::config::SharedSecret;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Authentication successful";

// =============================================================================
// ERROR
// =============================================================================

/// Failure outcomes of a login attempt. Each maps to exactly one status code.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// `password` absent, `null`, or otherwise empty.
    #[error("password is required")]
    MissingPassword,

    /// `password` present but not equal to the shared secret.
    #[error("invalid password")]
    InvalidPassword,

    /// Request used a verb other than POST or OPTIONS.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Body could not be interpreted. Detail is for server logs only.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingPassword => StatusCode::BAD_REQUEST,
            Self::InvalidPassword => StatusCode::UNAUTHORIZED,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the caller in the `error` field.
    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MissingPassword => "Password is required",
            Self::InvalidPassword => "Invalid password",
            Self::MethodNotAllowed => "Method not allowed",
            Self::Internal(_) => "Internal server error",
        }
    }
}

// =============================================================================
// CANDIDATE EXTRACTION
// =============================================================================

/// The `password` field as submitted, after emptiness checks.
#[derive(Debug, PartialEq, Eq)]
enum Candidate {
    Text(String),
    /// A non-empty value that is not a string (number, object, `true`, ...).
    /// Never equal to the secret.
    NonText,
}

/// An empty body is read as `{}`. JSON `null` cannot carry fields and is
/// treated as malformed; any other non-object has no `password`.
fn extract_candidate(body: &[u8]) -> Result<Candidate, AuthError> {
    let body = if body.is_empty() { b"{}".as_slice() } else { body };
    let value: Value = serde_json::from_slice(body).map_err(|e| AuthError::Internal(e.to_string()))?;

    let field = match value {
        Value::Null => return Err(AuthError::Internal("request body is null".into())),
        Value::Object(mut map) => map.remove("password"),
        _ => None,
    };

    match field {
        None | Some(Value::Null | Value::Bool(false)) => Err(AuthError::MissingPassword),
        Some(Value::String(s)) if s.is_empty() => Err(AuthError::MissingPassword),
        Some(Value::Number(n)) if is_zero(&n) => Err(AuthError::MissingPassword),
        Some(Value::String(s)) => Ok(Candidate::Text(s)),
        Some(_) => Ok(Candidate::NonText),
    }
}

#[allow(clippy::float_cmp)]
fn is_zero(n: &serde_json::Number) -> bool {
    n.as_f64().is_some_and(|f| f == 0.0)
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Constant-time equality of two secrets of arbitrary length.
#[must_use]
pub fn secrets_match(expected: &str, candidate: &str) -> bool {
    let expected = Sha256::digest(expected.as_bytes());
    let candidate = Sha256::digest(candidate.as_bytes());
    expected.ct_eq(&candidate).into()
}

/// Check a raw `/auth-login` body against the shared secret.
///
/// # Errors
///
/// - [`AuthError::Internal`] if the body is not valid JSON (or is `null`)
/// - [`AuthError::MissingPassword`] if `password` is absent or empty
/// - [`AuthError::InvalidPassword`] if `password` does not match
pub fn verify_login_body(secret: &SharedSecret, body: &[u8]) -> Result<(), AuthError> {
    match extract_candidate(body)? {
        Candidate::Text(candidate) if secrets_match(secret.expose(), &candidate) => Ok(()),
        Candidate::Text(_) | Candidate::NonText => Err(AuthError::InvalidPassword),
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
