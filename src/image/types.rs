//! Image generation types: provider-neutral result, error, and trait.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by image provider operations.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the provider failed before a response arrived.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The provider returned a non-success HTTP status.
    ///
    /// `message` holds the provider's own error message when the body carried one.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, message: Option<String>, body: String },

    /// The provider response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The provider answered but included neither base64 data nor a URL.
    #[error("provider returned no image data")]
    EmptyImage,

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// RESULT
// =============================================================================

/// One generated image. At least one of `image_b64` / `image_url` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub image_b64: Option<String>,
    pub image_url: Option<String>,
}

// =============================================================================
// GENERATOR TRAIT
// =============================================================================

/// Provider-neutral async image generation. Enables mocking in tests.
#[async_trait::async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate a single image for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns an [`ImageError`] if the request fails, the provider rejects
    /// it, or the response carries no image.
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ImageError>;
}
