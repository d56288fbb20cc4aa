//! Admin intercession post handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use domain::models::intercession::{
    encode_images, CreateIntercessionRequest, IntercessionResponse, ListIntercessionsResponse,
    SetPublishedRequest, UpdateIntercessionRequest,
};
use domain::models::IntercessionPost;
use persistence::repositories::IntercessionRepository;

use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/admin/intercessions
///
/// Lists all posts including drafts, by event date, newest first.
pub async fn list_all(
    State(state): State<AppState>,
) -> Result<Json<ListIntercessionsResponse>, ApiError> {
    let repo = IntercessionRepository::new(state.pool.clone());
    let posts = repo
        .list_all()
        .await?
        .into_iter()
        .map(IntercessionPost::from)
        .collect();

    Ok(Json(ListIntercessionsResponse { posts }))
}

/// POST /api/admin/intercessions
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateIntercessionRequest>,
) -> Result<(StatusCode, Json<IntercessionResponse>), ApiError> {
    req.validate()?;

    let repo = IntercessionRepository::new(state.pool.clone());
    let entity = repo
        .create(
            req.title.trim(),
            req.description.trim(),
            req.date,
            &encode_images(&req.images),
            req.published,
        )
        .await?;

    let intercession: IntercessionPost = entity.into();
    tracing::info!(post_id = %intercession.id, published = intercession.published, "Intercession post created");

    Ok((
        StatusCode::CREATED,
        Json(IntercessionResponse { intercession }),
    ))
}

/// GET /api/admin/intercessions/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<IntercessionResponse>, ApiError> {
    let repo = IntercessionRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Intercession post not found".to_string()))?;

    Ok(Json(IntercessionResponse {
        intercession: entity.into(),
    }))
}

/// PUT /api/admin/intercessions/:id
///
/// Full replacement of a post, including its image list.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateIntercessionRequest>,
) -> Result<Json<IntercessionResponse>, ApiError> {
    req.validate()?;

    let repo = IntercessionRepository::new(state.pool.clone());
    let entity = repo
        .update(
            id,
            req.title.trim(),
            req.description.trim(),
            req.date,
            &encode_images(&req.images),
            req.published,
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("Intercession post not found".to_string()))?;

    Ok(Json(IntercessionResponse {
        intercession: entity.into(),
    }))
}

/// PATCH /api/admin/intercessions/:id
///
/// Publishes or unpublishes a post without touching its content.
pub async fn set_published(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetPublishedRequest>,
) -> Result<Json<IntercessionResponse>, ApiError> {
    let repo = IntercessionRepository::new(state.pool.clone());
    let entity = repo
        .set_published(id, req.published)
        .await?
        .ok_or_else(|| ApiError::NotFound("Intercession post not found".to_string()))?;

    tracing::info!(post_id = %id, published = req.published, "Intercession publish flag changed");

    Ok(Json(IntercessionResponse {
        intercession: entity.into(),
    }))
}

/// DELETE /api/admin/intercessions/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let repo = IntercessionRepository::new(state.pool.clone());
    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("Intercession post not found".to_string()));
    }

    tracing::info!(post_id = %id, "Intercession post deleted");
    Ok(StatusCode::NO_CONTENT)
}
