//! Image route: prompt proxy to the configured image provider.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::image::{GeneratedImage, ImageError, ImageGenerator};
use crate::state::AppState;

const GENERIC_FAILURE: &str = "Failed to generate image";

#[derive(Deserialize)]
struct GenerateImageRequest {
    #[serde(default)]
    prompt: Option<String>,
}

impl GenerateImageRequest {
    /// JSON that is not an object carries no prompt; `null` is rejected.
    fn from_body(body: &[u8]) -> Result<Self, String> {
        match serde_json::from_slice::<Value>(body).map_err(|e| e.to_string())? {
            Value::Null => Err("request body is null".into()),
            value @ Value::Object(_) => serde_json::from_value(value).map_err(|e| e.to_string()),
            _ => Ok(Self { prompt: None }),
        }
    }
}

/// Absent image fields are omitted rather than sent as `null`.
#[derive(Debug, Serialize)]
pub struct GenerateImageResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_b64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub prompt: String,
}

impl GenerateImageResponse {
    fn new(image: GeneratedImage, prompt: String) -> Self {
        Self { image_b64: image.image_b64, image_url: image.image_url, prompt }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

/// Caller-facing message for a provider failure.
///
/// Provider API messages pass through; everything else is generic.
pub(crate) fn image_error_message(err: &ImageError) -> &str {
    match err {
        ImageError::EmptyImage => "Failed to generate image data",
        ImageError::ApiResponse { message: Some(message), .. } => message.as_str(),
        _ => GENERIC_FAILURE,
    }
}

/// `POST /api/generate-image`: generate one image for `{"prompt": ...}`.
pub async fn generate_image(State(state): State<AppState>, body: Bytes) -> Response {
    let request = match GenerateImageRequest::from_body(&body) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = %e, "generate-image body parse failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE);
        }
    };

    let prompt = request.prompt.unwrap_or_default();
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Prompt is required");
    }

    let Some(images) = &state.images else {
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "OpenAI API key not configured");
    };

    let result = images.generate(trimmed).await;
    match result {
        Ok(image) => Json(GenerateImageResponse::new(image, prompt)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "image generation failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, image_error_message(&e))
        }
    }
}

/// Any other verb on `/api/generate-image`.
pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

#[cfg(test)]
#[path = "images_test.rs"]
mod tests;
