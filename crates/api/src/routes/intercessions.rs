//! Public intercession gallery handlers.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use domain::models::intercession::ListIntercessionsResponse;
use domain::models::IntercessionPost;
use persistence::repositories::IntercessionRepository;

use crate::app::AppState;
use crate::error::ApiError;

/// Query parameters for the public gallery listing.
#[derive(Debug, Deserialize)]
pub struct ListIntercessionsQuery {
    pub limit: Option<i64>,
}

/// GET /api/intercessions
///
/// Lists published posts by event date, newest first. Drafts never appear
/// here regardless of query parameters.
pub async fn list_published(
    State(state): State<AppState>,
    Query(query): Query<ListIntercessionsQuery>,
) -> Result<Json<ListIntercessionsResponse>, ApiError> {
    let limit = query.limit.filter(|l| *l > 0);

    let repo = IntercessionRepository::new(state.pool.clone());
    let posts = repo
        .list_published(limit)
        .await?
        .into_iter()
        .map(IntercessionPost::from)
        .collect();

    Ok(Json(ListIntercessionsResponse { posts }))
}
