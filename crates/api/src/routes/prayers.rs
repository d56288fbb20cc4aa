//! Public prayer submission and lookup handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use domain::models::prayer::{
    ListPrayersResponse, Prayer, SubmitPrayerRequest, SubmitPrayerResponse,
};
use persistence::repositories::{NewPrayer, PrayerRepository, QrGroupRepository};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_prayer_submitted;

/// Trims a field and drops it entirely when blank.
fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// POST /api/prayers
///
/// Accepts an anonymous or named prayer request. A `source` slug from a QR
/// code link is resolved to its group when one is active; an unknown slug is
/// kept as raw attribution without failing the submission.
pub async fn submit_prayer(
    State(state): State<AppState>,
    Json(req): Json<SubmitPrayerRequest>,
) -> Result<(StatusCode, Json<SubmitPrayerResponse>), ApiError> {
    req.validate()?;

    let source = normalize(req.source);
    let qr_code_group_id = match &source {
        Some(slug) => {
            let groups = QrGroupRepository::new(state.pool.clone());
            match groups.find_active_by_slug(slug).await? {
                Some(group) => Some(group.id),
                None => {
                    tracing::debug!(slug = %slug, "Unknown QR source slug, keeping raw attribution");
                    None
                }
            }
        }
        None => None,
    };

    let repo = PrayerRepository::new(state.pool.clone());
    let entity = repo
        .create(NewPrayer {
            name: normalize(req.name),
            email: normalize(req.email).map(|e| e.to_lowercase()),
            prayer: req.prayer.trim().to_string(),
            prayer_for_other: req.prayer_for_other,
            other_person_name: normalize(req.other_person_name),
            source,
            qr_code_group_id,
        })
        .await?;

    let prayer: Prayer = entity.into();
    record_prayer_submitted(prayer.source.as_deref().unwrap_or("direct"));

    tracing::info!(prayer_id = %prayer.id, "Prayer submitted");

    Ok((
        StatusCode::CREATED,
        Json(SubmitPrayerResponse {
            message: "Pedido de oração enviado com sucesso".to_string(),
            prayer,
        }),
    ))
}

/// Query parameters for the public prayer lookup.
#[derive(Debug, Deserialize)]
pub struct ListPrayersQuery {
    pub email: Option<String>,
}

/// GET /api/prayers?email=
///
/// Lists the prayers a submitter left with the given email, newest first.
pub async fn list_prayers(
    State(state): State<AppState>,
    Query(query): Query<ListPrayersQuery>,
) -> Result<Json<ListPrayersResponse>, ApiError> {
    let email = match normalize(query.email) {
        Some(e) => e.to_lowercase(),
        None => {
            return Err(ApiError::Validation(
                "email query parameter is required".to_string(),
            ))
        }
    };

    let repo = PrayerRepository::new(state.pool.clone());
    let prayers = repo
        .list_by_email(&email)
        .await?
        .into_iter()
        .map(Prayer::from)
        .collect();

    Ok(Json(ListPrayersResponse { prayers }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_drops_blank() {
        assert_eq!(normalize(Some("  Maria  ".to_string())), Some("Maria".to_string()));
        assert_eq!(normalize(Some("   ".to_string())), None);
        assert_eq!(normalize(Some(String::new())), None);
        assert_eq!(normalize(None), None);
    }
}
