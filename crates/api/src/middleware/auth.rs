//! Admin authentication middleware.
//!
//! Protects the dashboard endpoints with a configured bearer token.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shared::crypto::sha256_hex;

use crate::app::AppState;

/// Middleware for admin-only routes.
///
/// Requires an `Authorization: Bearer <token>` header matching the
/// configured admin token. Tokens are compared by SHA-256 digest so the
/// comparison does not depend on input length.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    let token = match token {
        Some(t) if !t.is_empty() => t,
        _ => return unauthorized_response("Missing or malformed Authorization header"),
    };

    if sha256_hex(token) != sha256_hex(&state.config.security.admin_token) {
        return unauthorized_response("Invalid admin token");
    }

    next.run(req).await
}

/// Helper to create unauthorized response.
fn unauthorized_response(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "unauthorized",
            "message": message
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_response_status() {
        let response = unauthorized_response("test");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_bearer_prefix_stripping() {
        let header = "Bearer my-secret-token";
        assert_eq!(header.strip_prefix("Bearer "), Some("my-secret-token"));
    }

    #[test]
    fn test_bearer_prefix_missing() {
        let header = "Basic dXNlcjpwYXNz";
        assert_eq!(header.strip_prefix("Bearer "), None);
    }

    #[test]
    fn test_digest_comparison_matches_equal_tokens() {
        assert_eq!(sha256_hex("token-a"), sha256_hex("token-a"));
        assert_ne!(sha256_hex("token-a"), sha256_hex("token-b"));
    }
}
