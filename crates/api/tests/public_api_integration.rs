//! Integration tests for the public API surface.
//!
//! These tests exercise the request pipeline up to the validation and token
//! checks, which reject before any database work happens.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use common::{create_test_app, get_request, json_request, parse_response_body};

#[tokio::test]
async fn test_liveness_probe() {
    let app = create_test_app();

    let response = app.oneshot(get_request("/api/health/live")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn test_security_headers_present() {
    let app = create_test_app();

    let response = app.oneshot(get_request("/api/health/live")).await.unwrap();

    let headers = response.headers();
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
}

#[tokio::test]
async fn test_request_id_echoed_in_response() {
    let app = create_test_app();

    let request = axum::http::Request::builder()
        .method(Method::GET)
        .uri("/api/health/live")
        .header("X-Request-ID", "integration-test-42")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "integration-test-42"
    );
}

#[tokio::test]
async fn test_request_id_generated_when_absent() {
    let app = create_test_app();

    let response = app.oneshot(get_request("/api/health/live")).await.unwrap();
    let request_id = response.headers().get("x-request-id").unwrap();
    assert!(!request_id.is_empty());
}

#[tokio::test]
async fn test_submit_prayer_blank_text_rejected() {
    let app = create_test_app();

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/prayers",
            json!({"prayer": "   "}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_submit_prayer_empty_text_rejected() {
    let app = create_test_app();

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/prayers",
            json!({"prayer": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_submit_prayer_invalid_email_rejected() {
    let app = create_test_app();

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/prayers",
            json!({"prayer": "Pela minha familia", "email": "not-an-email"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_submit_prayer_malformed_json_rejected() {
    let app = create_test_app();

    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/prayers")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_list_prayers_requires_email() {
    let app = create_test_app();

    let response = app.oneshot(get_request("/api/prayers")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_list_prayers_blank_email_rejected() {
    let app = create_test_app();

    let response = app
        .oneshot(get_request("/api/prayers?email=%20%20"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unsubscribe_check_requires_params() {
    let app = create_test_app();

    let response = app.oneshot(get_request("/api/unsubscribe")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unsubscribe_check_requires_token() {
    let app = create_test_app();

    let response = app
        .oneshot(get_request("/api/unsubscribe?email=maria%40example.com"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unsubscribe_check_bad_token_forbidden() {
    let app = create_test_app();

    let response = app
        .oneshot(get_request(
            "/api/unsubscribe?email=maria%40example.com&token=0000000000000000",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "forbidden");
}

#[tokio::test]
async fn test_unsubscribe_post_bad_token_forbidden() {
    let app = create_test_app();

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/unsubscribe",
            json!({"email": "maria@example.com", "token": "0000000000000000"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unsubscribe_post_invalid_email_rejected() {
    let app = create_test_app();

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/unsubscribe",
            json!({"email": "nope", "token": "0000000000000000"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = create_test_app();

    let response = app.oneshot(get_request("/api/nonexistent")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
