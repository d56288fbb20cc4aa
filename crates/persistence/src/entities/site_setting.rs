//! Site setting entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the site_settings key/value table.
#[derive(Debug, Clone, FromRow)]
pub struct SiteSettingEntity {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}
