//! Public email opt-out handlers.
//!
//! Tokens are HMAC digests keyed on the server secret, so links from old
//! notification emails keep working without storing per-recipient state.

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use domain::models::unsubscribe::{
    UnsubscribeRequest, UnsubscribeResponse, UnsubscribeStatusQuery, UnsubscribeStatusResponse,
};
use persistence::repositories::UnsubscribeRepository;
use shared::crypto::verify_unsubscribe_token;

use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/unsubscribe?email=&token=
///
/// Checks whether an address is already on the opt-out list. Requires a
/// valid token so the status of arbitrary addresses cannot be probed.
pub async fn check_status(
    State(state): State<AppState>,
    Query(query): Query<UnsubscribeStatusQuery>,
) -> Result<Json<UnsubscribeStatusResponse>, ApiError> {
    let (email, token) = match (query.email, query.token) {
        (Some(e), Some(t)) if !e.trim().is_empty() && !t.trim().is_empty() => (e, t),
        _ => {
            return Err(ApiError::Validation(
                "email and token query parameters are required".to_string(),
            ))
        }
    };

    if !verify_unsubscribe_token(&state.config.security.unsubscribe_secret, &email, &token) {
        return Err(ApiError::Forbidden("Invalid unsubscribe token".to_string()));
    }

    let repo = UnsubscribeRepository::new(state.pool.clone());
    let already_unsubscribed = repo.find_by_email(&email).await?.is_some();

    Ok(Json(UnsubscribeStatusResponse {
        email: email.to_lowercase(),
        already_unsubscribed,
    }))
}

/// POST /api/unsubscribe
///
/// Adds an address to the opt-out list. Idempotent: unsubscribing twice
/// succeeds with the same result.
pub async fn unsubscribe(
    State(state): State<AppState>,
    Json(req): Json<UnsubscribeRequest>,
) -> Result<Json<UnsubscribeResponse>, ApiError> {
    req.validate()?;

    if !verify_unsubscribe_token(
        &state.config.security.unsubscribe_secret,
        &req.email,
        &req.token,
    ) {
        return Err(ApiError::Forbidden("Invalid unsubscribe token".to_string()));
    }

    let repo = UnsubscribeRepository::new(state.pool.clone());
    repo.insert(&req.email, req.reason.as_deref()).await?;

    tracing::info!(email = %req.email.to_lowercase(), "Email unsubscribed");

    Ok(Json(UnsubscribeResponse {
        success: true,
        message: "Notificações por email canceladas com sucesso".to_string(),
    }))
}

/// Query parameters for the admin opt-out lookup.
#[derive(Debug, serde::Deserialize)]
pub struct AdminCheckQuery {
    pub email: Option<String>,
}

/// GET /api/admin/unsubscribes/check?email=
///
/// Token-free opt-out lookup for the dashboard, behind admin auth.
pub async fn check_status_admin(
    State(state): State<AppState>,
    Query(query): Query<AdminCheckQuery>,
) -> Result<Json<UnsubscribeStatusResponse>, ApiError> {
    let email = match query.email.map(|e| e.trim().to_string()) {
        Some(e) if !e.is_empty() => e,
        _ => {
            return Err(ApiError::Validation(
                "email query parameter is required".to_string(),
            ))
        }
    };

    let repo = UnsubscribeRepository::new(state.pool.clone());
    let already_unsubscribed = repo.find_by_email(&email).await?.is_some();

    Ok(Json(UnsubscribeStatusResponse {
        email: email.to_lowercase(),
        already_unsubscribed,
    }))
}
