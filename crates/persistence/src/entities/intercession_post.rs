//! Intercession post entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::intercession::{decode_images, IntercessionPost};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the intercession_posts table.
///
/// The `images` column holds the JSON-encoded URL list; decoding happens
/// in the conversion to the domain model and falls back to an empty list
/// on malformed data.
#[derive(Debug, Clone, FromRow)]
pub struct IntercessionPostEntity {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub images: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

impl From<IntercessionPostEntity> for IntercessionPost {
    fn from(e: IntercessionPostEntity) -> Self {
        IntercessionPost {
            id: e.id,
            title: e.title,
            description: e.description,
            date: e.date,
            images: decode_images(&e.images),
            published: e.published,
            created_at: e.created_at,
        }
    }
}
