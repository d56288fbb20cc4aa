//! Site verse handlers.

use axum::{extract::State, Json};
use validator::Validate;

use domain::models::settings::{
    UpdateVerseRequest, Verse, VerseResponse, VERSE_REFERENCE_KEY, VERSE_TEXT_KEY,
};
use persistence::repositories::SettingRepository;

use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/verse
///
/// Returns the verse shown on the public submission page. Falls back to the
/// built-in default until an admin edits it.
pub async fn get_verse(State(state): State<AppState>) -> Result<Json<VerseResponse>, ApiError> {
    let repo = SettingRepository::new(state.pool.clone());
    let default = Verse::default();

    let text = repo
        .get(VERSE_TEXT_KEY)
        .await?
        .map(|s| s.value)
        .unwrap_or(default.text);
    let reference = repo
        .get(VERSE_REFERENCE_KEY)
        .await?
        .map(|s| s.value)
        .unwrap_or(default.reference);

    Ok(Json(VerseResponse {
        verse: Verse { text, reference },
    }))
}

/// POST /api/admin/verse
///
/// Updates the displayed verse.
pub async fn update_verse(
    State(state): State<AppState>,
    Json(req): Json<UpdateVerseRequest>,
) -> Result<Json<VerseResponse>, ApiError> {
    req.validate()?;

    let repo = SettingRepository::new(state.pool.clone());
    let text = repo.upsert(VERSE_TEXT_KEY, req.text.trim()).await?;
    let reference = repo
        .upsert(VERSE_REFERENCE_KEY, req.reference.trim())
        .await?;

    tracing::info!(reference = %reference.value, "Verse updated");

    Ok(Json(VerseResponse {
        verse: Verse {
            text: text.value,
            reference: reference.value,
        },
    }))
}
