use axum::http::{Method, StatusCode};

use crate::routes::api_routes;
use crate::routes::test_client::send;
use crate::state::test_helpers::test_app_state;

async fn post_login(body: &str) -> crate::routes::test_client::TestResponse {
    send(api_routes(test_app_state()), Method::POST, "/auth-login", body).await
}

// =============================================================================
// POST /auth-login
// =============================================================================

#[tokio::test]
async fn correct_password_returns_success_payload() {
    let resp = post_login(r#"{"password":"mike2025"}"#).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json(), serde_json::json!({ "success": true, "message": "Authentication successful" }));
}

#[tokio::test]
async fn wrong_password_returns_401() {
    let resp = post_login(r#"{"password":"wrong"}"#).await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp.json(), serde_json::json!({ "error": "Invalid password" }));
}

#[tokio::test]
async fn case_variant_and_padded_passwords_return_401() {
    for body in [r#"{"password":"MIKE2025"}"#, r#"{"password":" mike2025"}"#, r#"{"password":"  "}"#] {
        let resp = post_login(body).await;
        assert_eq!(resp.status, StatusCode::UNAUTHORIZED, "body {body}");
    }
}

#[tokio::test]
async fn missing_password_returns_400() {
    let resp = post_login("{}").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.json(), serde_json::json!({ "error": "Password is required" }));
}

#[tokio::test]
async fn empty_password_returns_400() {
    let resp = post_login(r#"{"password":""}"#).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_body_returns_400() {
    let resp = post_login("").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.json(), serde_json::json!({ "error": "Password is required" }));
}

#[tokio::test]
async fn malformed_json_returns_generic_500() {
    let resp = post_login(r#"{"password": mike2025"#).await;
    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.json(), serde_json::json!({ "error": "Internal server error" }));
}

fn assert_full_cors_headers(resp: &crate::routes::test_client::TestResponse) {
    assert_eq!(resp.header("access-control-allow-origin"), Some("*"));
    assert_eq!(resp.header("access-control-allow-methods"), Some("POST, OPTIONS"));
    assert_eq!(resp.header("access-control-allow-headers"), Some("Content-Type"));
}

#[tokio::test]
async fn responses_carry_cors_headers() {
    for (body, status) in [
        (r#"{"password":"mike2025"}"#, StatusCode::OK),
        (r#"{"password":"wrong"}"#, StatusCode::UNAUTHORIZED),
        ("{}", StatusCode::BAD_REQUEST),
        ("{not json", StatusCode::INTERNAL_SERVER_ERROR),
    ] {
        let resp = post_login(body).await;
        assert_eq!(resp.status, status, "body {body}");
        assert_full_cors_headers(&resp);
    }
}

#[tokio::test]
async fn method_not_allowed_carries_cors_headers() {
    let resp = send(api_routes(test_app_state()), Method::GET, "/auth-login", "").await;
    assert_eq!(resp.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_full_cors_headers(&resp);
}

// =============================================================================
// Other methods
// =============================================================================

#[tokio::test]
async fn options_returns_empty_200_with_cors_headers() {
    let resp = send(api_routes(test_app_state()), Method::OPTIONS, "/auth-login", "not even json").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.is_empty());
    assert_eq!(resp.header("access-control-allow-origin"), Some("*"));
    let methods = resp.header("access-control-allow-methods").unwrap_or_default();
    assert!(methods.contains("POST"), "allow-methods was {methods:?}");
    let headers = resp.header("access-control-allow-headers").unwrap_or_default();
    assert!(headers.eq_ignore_ascii_case("content-type"), "allow-headers was {headers:?}");
}

#[tokio::test]
async fn get_returns_405() {
    let resp = send(api_routes(test_app_state()), Method::GET, "/auth-login", "").await;
    assert_eq!(resp.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(resp.json(), serde_json::json!({ "error": "Method not allowed" }));
}

#[tokio::test]
async fn other_verbs_return_405() {
    for method in [Method::PUT, Method::DELETE, Method::PATCH] {
        let resp = send(api_routes(test_app_state()), method.clone(), "/auth-login", r#"{"password":"mike2025"}"#).await;
        assert_eq!(resp.status, StatusCode::METHOD_NOT_ALLOWED, "method {method}");
    }
}
