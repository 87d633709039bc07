//! Image generation: provider adapter behind `POST /api/generate-image`.
//!
//! DESIGN
//! ======
//! Handlers only see the [`ImageGenerator`] trait, so tests swap in a mock
//! and the provider can change without touching routes. The production
//! implementation talks to the OpenAI Images API.

pub mod config;
pub mod openai;
pub mod types;

use std::sync::Arc;

use config::ImageConfig;
pub use types::{GeneratedImage, ImageError, ImageGenerator};

/// Build the configured image generator from environment variables.
///
/// # Errors
///
/// Returns an error if the API key is missing or the HTTP client fails.
pub fn from_env() -> Result<Arc<dyn ImageGenerator>, ImageError> {
    let config = ImageConfig::from_env()?;
    let client = openai::OpenAiImageClient::new(config)?;
    tracing::info!(model = client.model(), "image client initialized");
    Ok(Arc::new(client))
}
