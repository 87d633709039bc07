//! OpenAI Images API client.
//!
//! Thin HTTP wrapper for `POST /images/generations`. Response and error-body
//! parsing are pure functions so they can be tested without the network.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::config::{ImageConfig, ImageTimeouts};
use super::types::{GeneratedImage, ImageError, ImageGenerator};

// =============================================================================
// CLIENT
// =============================================================================

pub struct OpenAiImageClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiImageClient {
    /// Build a client from typed config.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: ImageConfig) -> Result<Self, ImageError> {
        let ImageConfig { api_key, model, base_url, timeouts: ImageTimeouts { request_secs, connect_secs } } = config;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(request_secs))
            .connect_timeout(Duration::from_secs(connect_secs))
            .build()
            .map_err(|e| ImageError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url, model })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn send_json(&self, path: &str, body: &impl Serialize) -> Result<String, ImageError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| ImageError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ImageError::ApiRequest(e.to_string()))?;
        if status != 200 {
            let message = parse_error_message(&text);
            return Err(ImageError::ApiResponse { status, message, body: text });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl ImageGenerator for OpenAiImageClient {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ImageError> {
        let body = GenerationRequest { model: &self.model, prompt, n: 1 };
        let text = self.send_json("/images/generations", &body).await?;
        parse_generation_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u8,
}

#[derive(Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    data: Vec<GenerationData>,
}

#[derive(Deserialize)]
struct GenerationData {
    b64_json: Option<String>,
    url: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

/// Extract the first image from a successful generation response.
pub(crate) fn parse_generation_response(json_text: &str) -> Result<GeneratedImage, ImageError> {
    let parsed: GenerationResponse =
        serde_json::from_str(json_text).map_err(|e| ImageError::ApiParse(e.to_string()))?;
    let first = parsed.data.into_iter().next();
    let (image_b64, image_url) = first.map_or((None, None), |d| (non_empty(d.b64_json), non_empty(d.url)));
    if image_b64.is_none() && image_url.is_none() {
        return Err(ImageError::EmptyImage);
    }
    Ok(GeneratedImage { image_b64, image_url })
}

/// Pull `error.message` out of a provider error body, if present.
pub(crate) fn parse_error_message(json_text: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(json_text)
        .ok()
        .and_then(|e| e.error.message)
        .filter(|m| !m.trim().is_empty())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
