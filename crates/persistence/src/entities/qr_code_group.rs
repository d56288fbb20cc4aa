//! QR code group entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::qr_group::{QrCodeGroup, QrCodeGroupWithCount};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the qr_code_groups table.
#[derive(Debug, Clone, FromRow)]
pub struct QrCodeGroupEntity {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub color: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<QrCodeGroupEntity> for QrCodeGroup {
    fn from(e: QrCodeGroupEntity) -> Self {
        QrCodeGroup {
            id: e.id,
            name: e.name,
            slug: e.slug,
            description: e.description,
            color: e.color,
            active: e.active,
            created_at: e.created_at,
        }
    }
}

/// Group row joined with its linked prayer count.
#[derive(Debug, Clone, FromRow)]
pub struct QrCodeGroupWithCountEntity {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub color: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub prayer_count: i64,
}

impl From<QrCodeGroupWithCountEntity> for QrCodeGroupWithCount {
    fn from(e: QrCodeGroupWithCountEntity) -> Self {
        QrCodeGroupWithCount {
            group: QrCodeGroup {
                id: e.id,
                name: e.name,
                slug: e.slug,
                description: e.description,
                color: e.color,
                active: e.active,
                created_at: e.created_at,
            },
            prayer_count: e.prayer_count,
        }
    }
}
