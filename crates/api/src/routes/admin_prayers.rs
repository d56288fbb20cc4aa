//! Admin prayer dashboard handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use domain::models::prayer::{
    ListPrayersWithGroupResponse, Prayer, PrayerWithGroup, RespondPrayerRequest,
    RespondPrayerResponse,
};
use persistence::repositories::{PrayerRepository, UnsubscribeRepository};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_notification_result;

/// GET /api/admin/prayers
///
/// Lists every prayer with its QR group summary, newest first.
pub async fn list_prayers(
    State(state): State<AppState>,
) -> Result<Json<ListPrayersWithGroupResponse>, ApiError> {
    let repo = PrayerRepository::new(state.pool.clone());
    let prayers = repo
        .list_all_with_group()
        .await?
        .into_iter()
        .map(PrayerWithGroup::from)
        .collect();

    Ok(Json(ListPrayersWithGroupResponse { prayers }))
}

/// PATCH /api/admin/prayers/:id
///
/// Saves a response on a prayer and optionally notifies the submitter.
///
/// The save always succeeds independently of email delivery: a failed or
/// skipped notification is reported in the response body, never as an HTTP
/// error. Editing a response re-arms the notified flag so a later send goes
/// out again.
pub async fn respond(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RespondPrayerRequest>,
) -> Result<Json<RespondPrayerResponse>, ApiError> {
    req.validate()?;

    let response = req
        .response
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty());

    let repo = PrayerRepository::new(state.pool.clone());
    let mut prayer: Prayer = repo
        .update_response(id, response)
        .await?
        .ok_or_else(|| ApiError::NotFound("Prayer not found".to_string()))?
        .into();

    let mut email_sent = false;
    let mut unsubscribed = false;

    if req.send_email {
        match (&prayer.email, response) {
            (Some(email), Some(response_text)) => {
                let unsubscribes = UnsubscribeRepository::new(state.pool.clone());
                if unsubscribes.find_by_email(email).await?.is_some() {
                    unsubscribed = true;
                    tracing::info!(prayer_id = %id, "Submitter unsubscribed, skipping notification");
                    record_notification_result("unsubscribed");
                } else if !state.email.is_enabled() {
                    tracing::debug!(prayer_id = %id, "Email disabled, skipping notification");
                    record_notification_result("disabled");
                } else {
                    match state
                        .email
                        .send_prayer_response(
                            email,
                            prayer.name.as_deref(),
                            &prayer.prayer,
                            response_text,
                        )
                        .await
                    {
                        Ok(()) => {
                            repo.set_notified(id, true).await?;
                            prayer.notified_by_email = true;
                            email_sent = true;
                            record_notification_result("sent");
                        }
                        Err(err) => {
                            tracing::warn!(
                                prayer_id = %id,
                                error = %err,
                                "Notification email failed, response saved anyway"
                            );
                            record_notification_result("failed");
                        }
                    }
                }
            }
            _ => {
                tracing::debug!(prayer_id = %id, "No recipient or response text, nothing to send");
            }
        }
    }

    Ok(Json(RespondPrayerResponse {
        prayer,
        email_sent,
        unsubscribed,
    }))
}

/// DELETE /api/admin/prayers/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let repo = PrayerRepository::new(state.pool.clone());
    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("Prayer not found".to_string()));
    }

    tracing::info!(prayer_id = %id, "Prayer deleted");
    Ok(StatusCode::NO_CONTENT)
}
