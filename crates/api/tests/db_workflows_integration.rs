//! Database-backed workflow tests.
//!
//! These exercise persistence behavior end to end and need a running
//! PostgreSQL instance (`TEST_DATABASE_URL`, same fallback as the rest of
//! the suite). They are ignored by default:
//!
//!     cargo test -p prayer-board-api -- --ignored

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use common::{
    create_test_app, create_test_pool, get_request, json_request, json_request_with_auth,
    parse_response_body, TEST_ADMIN_TOKEN, TEST_UNSUBSCRIBE_SECRET,
};

/// Applies migrations before handing out the shared test app.
async fn migrated_app() -> axum::Router {
    let pool = create_test_pool();
    sqlx::migrate!("../persistence/src/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    create_test_app()
}

/// Creates a QR group through the admin API and returns (id, slug).
async fn create_group(app: &axum::Router, name: &str) -> (String, String) {
    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::POST,
            "/api/admin/qr-groups",
            json!({ "name": name }),
            TEST_ADMIN_TOKEN,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_response_body(response).await;
    (
        body["group"]["id"].as_str().unwrap().to_string(),
        body["group"]["slug"].as_str().unwrap().to_string(),
    )
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_unknown_source_slug_keeps_raw_attribution_without_group() {
    let app = migrated_app().await;

    let slug = format!("panfleto-{}", Uuid::new_v4());
    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/prayers",
            json!({ "prayer": "Pela comunidade", "source": slug }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    assert_eq!(body["prayer"]["source"], json!(slug));
    assert!(body["prayer"]["qr_code_group_id"].is_null());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_known_source_slug_links_group() {
    let app = migrated_app().await;

    let name = format!("Entrada {}", Uuid::new_v4());
    let (group_id, slug) = create_group(&app, &name).await;

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/prayers",
            json!({ "prayer": "Pela família", "source": slug }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    assert_eq!(body["prayer"]["qr_code_group_id"], json!(group_id));
    assert_eq!(body["prayer"]["source"], json!(slug));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_duplicate_unsubscribe_is_idempotent() {
    let app = migrated_app().await;

    let email = format!("{}@example.com", Uuid::new_v4());
    let token = shared::crypto::unsubscribe_token(TEST_UNSUBSCRIBE_SECRET, &email);

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/unsubscribe",
                json!({ "email": email, "token": token }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = parse_response_body(response).await;
        assert_eq!(body["success"], json!(true));
    }

    let uri = format!(
        "/api/unsubscribe?email={}&token={}",
        email.replace('@', "%40"),
        token
    );
    let response = app.oneshot(get_request(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["already_unsubscribed"], json!(true));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_group_delete_blocked_while_prayers_linked() {
    let app = migrated_app().await;

    let name = format!("Culto {}", Uuid::new_v4());
    let (group_id, slug) = create_group(&app, &name).await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/prayers",
            json!({ "prayer": "Pelos enfermos", "source": slug }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let delete = Request::builder()
        .method(Method::DELETE)
        .uri(format!("/api/admin/qr-groups/{}", group_id))
        .header(header::AUTHORIZATION, format!("Bearer {}", TEST_ADMIN_TOKEN))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(delete).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = parse_response_body(response).await;
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("1 oração(ões) vinculada(s)"));
    assert!(message.contains("Desative-o"));
}
