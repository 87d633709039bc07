//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics. The string is
//! the server's `error` payload when one was returned, so pages can show it
//! to the user verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::GeneratedImage;
#[cfg(feature = "hydrate")]
use super::types::{ImageRequest, LoginRequest, LoginResponse};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorResponse;

pub const LOGIN_ENDPOINT: &str = "/auth-login";
pub const GENERATE_IMAGE_ENDPOINT: &str = "/api/generate-image";

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Error text for a non-2xx response: the `error` field, else the status.
#[cfg(any(test, feature = "hydrate"))]
fn error_message_from_body(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error)
        .ok()
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| request_failed_message(status))
}

/// Submit the shared password to `POST /auth-login`.
///
/// # Errors
///
/// Returns the server's error text (e.g. "Invalid password") or a transport
/// error description.
pub async fn login(password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&LoginRequest { password })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            log::warn!("login rejected: {status}");
            return Err(error_message_from_body(status, &body));
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        if body.success { Ok(()) } else { Err(body.message) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = password;
        Err("not available on server".to_owned())
    }
}

/// Request one image for `prompt` from `POST /api/generate-image`.
///
/// # Errors
///
/// Returns the server's error text or a transport error description.
pub async fn generate_image(prompt: &str) -> Result<GeneratedImage, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(GENERATE_IMAGE_ENDPOINT)
            .json(&ImageRequest { prompt })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            log::warn!("image generation failed: {status}");
            return Err(error_message_from_body(status, &body));
        }
        resp.json::<GeneratedImage>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = prompt;
        Err("not available on server".to_owned())
    }
}
