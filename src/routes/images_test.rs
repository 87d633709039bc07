use super::*;
use axum::http::Method;
use std::sync::{Arc, Mutex};

use crate::routes::api_routes;
use crate::routes::test_client::{TestResponse, send};
use crate::state::test_helpers::{test_app_state, test_app_state_with_images};

// =========================================================================
// MockImages
// =========================================================================

struct MockImages {
    result: Mutex<Option<Result<GeneratedImage, ImageError>>>,
    prompts: Mutex<Vec<String>>,
}

impl MockImages {
    fn returning(result: Result<GeneratedImage, ImageError>) -> Arc<Self> {
        Arc::new(Self { result: Mutex::new(Some(result)), prompts: Mutex::new(Vec::new()) })
    }
}

#[async_trait::async_trait]
impl ImageGenerator for MockImages {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ImageError> {
        self.prompts.lock().unwrap().push(prompt.to_owned());
        self.result
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Err(ImageError::EmptyImage))
    }
}

async fn post_with(images: Arc<MockImages>, body: &str) -> TestResponse {
    send(api_routes(test_app_state_with_images(images)), Method::POST, "/api/generate-image", body).await
}

// =========================================================================
// image_error_message
// =========================================================================

#[test]
fn error_message_for_empty_image() {
    assert_eq!(image_error_message(&ImageError::EmptyImage), "Failed to generate image data");
}

#[test]
fn error_message_passes_provider_message_through() {
    let err = ImageError::ApiResponse { status: 400, message: Some("content policy".into()), body: String::new() };
    assert_eq!(image_error_message(&err), "content policy");
}

#[test]
fn error_message_generic_otherwise() {
    let err = ImageError::ApiResponse { status: 502, message: None, body: "Bad Gateway".into() };
    assert_eq!(image_error_message(&err), "Failed to generate image");
    assert_eq!(image_error_message(&ImageError::ApiRequest("timeout".into())), "Failed to generate image");
}

// =========================================================================
// POST /api/generate-image
// =========================================================================

#[tokio::test]
async fn success_echoes_untrimmed_prompt_and_trims_for_provider() {
    let mock = MockImages::returning(Ok(GeneratedImage {
        image_b64: None,
        image_url: Some("https://images.test/cat.png".into()),
    }));
    let resp = post_with(mock.clone(), r#"{"prompt":"  a cat  "}"#).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.json(),
        serde_json::json!({ "image_url": "https://images.test/cat.png", "prompt": "  a cat  " })
    );
    assert_eq!(*mock.prompts.lock().unwrap(), vec!["a cat".to_owned()]);
}

#[tokio::test]
async fn blank_prompt_returns_400_without_calling_provider() {
    let mock = MockImages::returning(Err(ImageError::EmptyImage));
    let resp = post_with(mock.clone(), r#"{"prompt":"   "}"#).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.json(), serde_json::json!({ "error": "Prompt is required" }));
    assert!(mock.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn missing_prompt_returns_400() {
    let resp = post_with(MockImages::returning(Err(ImageError::EmptyImage)), "{}").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unconfigured_provider_returns_500() {
    let resp = send(api_routes(test_app_state()), Method::POST, "/api/generate-image", r#"{"prompt":"a cat"}"#).await;
    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.json(), serde_json::json!({ "error": "OpenAI API key not configured" }));
}

#[tokio::test]
async fn empty_provider_result_returns_500() {
    let resp = post_with(MockImages::returning(Err(ImageError::EmptyImage)), r#"{"prompt":"a cat"}"#).await;
    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.json(), serde_json::json!({ "error": "Failed to generate image data" }));
}

#[tokio::test]
async fn provider_api_error_message_is_returned() {
    let err = ImageError::ApiResponse { status: 400, message: Some("Billing hard limit reached".into()), body: String::new() };
    let resp = post_with(MockImages::returning(Err(err)), r#"{"prompt":"a cat"}"#).await;
    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.json(), serde_json::json!({ "error": "Billing hard limit reached" }));
}

#[tokio::test]
async fn invalid_json_returns_generic_500() {
    let resp = post_with(MockImages::returning(Err(ImageError::EmptyImage)), "prompt=cat").await;
    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.json(), serde_json::json!({ "error": "Failed to generate image" }));
}

#[tokio::test]
async fn non_object_json_body_returns_400() {
    for body in [r#""a cat""#, "42", "true"] {
        let mock = MockImages::returning(Err(ImageError::EmptyImage));
        let resp = post_with(mock.clone(), body).await;
        assert_eq!(resp.status, StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(resp.json(), serde_json::json!({ "error": "Prompt is required" }));
        assert!(mock.prompts.lock().unwrap().is_empty());
    }
}

#[tokio::test]
async fn null_body_returns_generic_500() {
    let resp = post_with(MockImages::returning(Err(ImageError::EmptyImage)), "null").await;
    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.json(), serde_json::json!({ "error": "Failed to generate image" }));
}

#[tokio::test]
async fn non_string_prompt_returns_generic_500() {
    let resp = post_with(MockImages::returning(Err(ImageError::EmptyImage)), r#"{"prompt":7}"#).await;
    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn error_responses_carry_full_cors_headers() {
    let resp = post_with(MockImages::returning(Err(ImageError::EmptyImage)), "{}").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.header("access-control-allow-origin"), Some("*"));
    assert_eq!(resp.header("access-control-allow-methods"), Some("POST, OPTIONS"));
    assert_eq!(resp.header("access-control-allow-headers"), Some("Content-Type"));
}

#[tokio::test]
async fn get_returns_405_plain_text() {
    let resp = send(api_routes(test_app_state()), Method::GET, "/api/generate-image", "").await;
    assert_eq!(resp.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(&resp.body[..], b"Method not allowed");
}

#[tokio::test]
async fn options_returns_200() {
    let resp = send(api_routes(test_app_state()), Method::OPTIONS, "/api/generate-image", "").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.header("access-control-allow-origin"), Some("*"));
}
