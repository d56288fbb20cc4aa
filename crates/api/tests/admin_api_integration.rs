//! Integration tests for the admin dashboard surface.
//!
//! Covers the bearer token gate and the pre-database validation paths of the
//! protected handlers.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use common::{
    create_test_app, get_request, get_request_with_auth, json_request_with_auth,
    parse_response_body, TEST_ADMIN_TOKEN,
};

#[tokio::test]
async fn test_admin_routes_require_auth() {
    let app = create_test_app();

    for uri in [
        "/api/admin/prayers",
        "/api/admin/intercessions",
        "/api/admin/qr-groups",
        "/api/admin/stats",
        "/api/admin/unsubscribes/check",
    ] {
        let response = app.clone().oneshot(get_request(uri)).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "expected 401 for {}",
            uri
        );
    }
}

#[tokio::test]
async fn test_admin_wrong_token_rejected() {
    let app = create_test_app();

    let response = app
        .oneshot(get_request_with_auth("/api/admin/prayers", "wrong-token"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "unauthorized");
}

#[tokio::test]
async fn test_admin_non_bearer_scheme_rejected() {
    let app = create_test_app();

    let request = axum::http::Request::builder()
        .method(Method::GET)
        .uri("/api/admin/prayers")
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_empty_bearer_rejected() {
    let app = create_test_app();

    let request = axum::http::Request::builder()
        .method(Method::GET)
        .uri("/api/admin/prayers")
        .header("Authorization", "Bearer ")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_verse_update_blank_text_rejected() {
    let app = create_test_app();

    let response = app
        .oneshot(json_request_with_auth(
            Method::POST,
            "/api/admin/verse",
            json!({"text": "   ", "reference": "João 3:16"}),
            TEST_ADMIN_TOKEN,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_group_create_blank_name_rejected() {
    let app = create_test_app();

    let response = app
        .oneshot(json_request_with_auth(
            Method::POST,
            "/api/admin/qr-groups",
            json!({"name": "  "}),
            TEST_ADMIN_TOKEN,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_group_create_invalid_color_rejected() {
    let app = create_test_app();

    let response = app
        .oneshot(json_request_with_auth(
            Method::POST,
            "/api/admin/qr-groups",
            json!({"name": "Entrada", "color": "blue"}),
            TEST_ADMIN_TOKEN,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_group_create_symbol_only_name_rejected() {
    // Slugs to an empty string, which cannot attribute anything.
    let app = create_test_app();

    let response = app
        .oneshot(json_request_with_auth(
            Method::POST,
            "/api/admin/qr-groups",
            json!({"name": "!!!"}),
            TEST_ADMIN_TOKEN,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_respond_invalid_id_rejected() {
    let app = create_test_app();

    let response = app
        .oneshot(json_request_with_auth(
            Method::PATCH,
            "/api/admin/prayers/not-a-uuid",
            json!({"response": "Amém"}),
            TEST_ADMIN_TOKEN,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_intercession_create_blank_title_rejected() {
    let app = create_test_app();

    let response = app
        .oneshot(json_request_with_auth(
            Method::POST,
            "/api/admin/intercessions",
            json!({
                "title": " ",
                "description": "Vigília na capela",
                "date": "2026-08-01T19:00:00Z"
            }),
            TEST_ADMIN_TOKEN,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unsubscribes_check_requires_email() {
    let app = create_test_app();

    let response = app
        .oneshot(get_request_with_auth(
            "/api/admin/unsubscribes/check",
            TEST_ADMIN_TOKEN,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
