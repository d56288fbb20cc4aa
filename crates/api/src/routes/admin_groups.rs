//! Admin QR code group handlers.
//!
//! Groups give printed QR codes a named attribution: each group's slug is
//! embedded in the distributed link as `?from=<slug>`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use domain::models::qr_group::{
    CreateGroupRequest, GroupResponse, ListGroupsResponse, QrCodeGroup, QrCodeGroupWithCount,
    UpdateGroupRequest, DEFAULT_GROUP_COLOR,
};
use persistence::repositories::QrGroupRepository;
use shared::slug::slugify;

use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/admin/qr-groups
///
/// Lists all groups with their linked prayer counts, newest first.
pub async fn list_groups(
    State(state): State<AppState>,
) -> Result<Json<ListGroupsResponse>, ApiError> {
    let repo = QrGroupRepository::new(state.pool.clone());
    let groups = repo
        .list_with_counts()
        .await?
        .into_iter()
        .map(QrCodeGroupWithCount::from)
        .collect();

    Ok(Json(ListGroupsResponse { groups }))
}

/// POST /api/admin/qr-groups
///
/// Creates a group; the slug is derived from the name. A name that slugs to
/// an existing slug is rejected as a conflict.
pub async fn create_group(
    State(state): State<AppState>,
    Json(req): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<GroupResponse>), ApiError> {
    req.validate()?;

    let name = req.name.trim().to_string();
    let slug = slugify(&name);
    if slug.is_empty() {
        return Err(ApiError::Validation(
            "Name must contain at least one letter or digit".to_string(),
        ));
    }

    let repo = QrGroupRepository::new(state.pool.clone());
    let entity = repo
        .create(
            &name,
            &slug,
            req.description.as_deref().map(str::trim),
            req.color.as_deref().unwrap_or(DEFAULT_GROUP_COLOR),
        )
        .await?;

    let group: QrCodeGroup = entity.into();
    tracing::info!(group_id = %group.id, slug = %group.slug, "QR group created");

    Ok((StatusCode::CREATED, Json(GroupResponse { group })))
}

/// PATCH /api/admin/qr-groups/:id
///
/// Partial update; renaming re-derives the slug from the new name.
pub async fn update_group(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateGroupRequest>,
) -> Result<Json<GroupResponse>, ApiError> {
    req.validate()?;

    let repo = QrGroupRepository::new(state.pool.clone());
    let current = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("QR group not found".to_string()))?;

    let (name, slug) = match req.name {
        Some(new_name) => {
            let new_name = new_name.trim().to_string();
            let new_slug = slugify(&new_name);
            if new_slug.is_empty() {
                return Err(ApiError::Validation(
                    "Name must contain at least one letter or digit".to_string(),
                ));
            }
            (new_name, new_slug)
        }
        None => (current.name, current.slug),
    };

    let description = match req.description {
        Some(d) => Some(d.trim().to_string()).filter(|d| !d.is_empty()),
        None => current.description,
    };
    let color = req.color.unwrap_or(current.color);
    let active = req.active.unwrap_or(current.active);

    let entity = repo
        .update(id, &name, &slug, description.as_deref(), &color, active)
        .await?
        .ok_or_else(|| ApiError::NotFound("QR group not found".to_string()))?;

    Ok(Json(GroupResponse {
        group: entity.into(),
    }))
}

/// DELETE /api/admin/qr-groups/:id
///
/// Deletion is blocked while prayers reference the group, so attribution
/// history stays intact. Deactivate the group instead to retire its QR code.
pub async fn delete_group(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let repo = QrGroupRepository::new(state.pool.clone());

    let linked = repo.count_linked_prayers(id).await?;
    if let Some(message) = deletion_blocked_message(linked) {
        return Err(ApiError::Validation(message));
    }

    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("QR group not found".to_string()));
    }

    tracing::info!(group_id = %id, "QR group deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Rejection message for deleting a group that still has prayers, carrying
/// the linked count so the dashboard can show it.
fn deletion_blocked_message(linked: i64) -> Option<String> {
    (linked > 0).then(|| {
        format!(
            "Este grupo possui {} oração(ões) vinculada(s) e não pode ser excluído. Desative-o em vez disso.",
            linked
        )
    })
}
