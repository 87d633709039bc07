//! Wire types for the server's JSON endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /auth-login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub password: &'a str,
}

/// Success body of `POST /auth-login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
}

/// Error body shared by all endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of `POST /api/generate-image`.
#[derive(Debug, Serialize)]
pub struct ImageRequest<'a> {
    pub prompt: &'a str,
}

/// Success body of `POST /api/generate-image`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GeneratedImage {
    #[serde(default)]
    pub image_b64: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub prompt: String,
}

impl GeneratedImage {
    /// `src` attribute for the image: inline base64 data wins over a URL.
    pub fn src(&self) -> Option<String> {
        if let Some(b64) = self.image_b64.as_deref().filter(|v| !v.is_empty()) {
            return Some(format!("data:image/png;base64,{b64}"));
        }
        self.image_url.clone().filter(|v| !v.is_empty())
    }
}
