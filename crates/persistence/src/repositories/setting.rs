//! Site setting repository for database operations.

use sqlx::PgPool;

use crate::entities::SiteSettingEntity;
use crate::metrics::QueryTimer;

/// Repository for the site_settings key/value table.
#[derive(Clone)]
pub struct SettingRepository {
    pool: PgPool,
}

impl SettingRepository {
    /// Creates a new SettingRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a setting by key.
    pub async fn get(&self, key: &str) -> Result<Option<SiteSettingEntity>, sqlx::Error> {
        let timer = QueryTimer::new("get_setting");
        let result = sqlx::query_as::<_, SiteSettingEntity>(
            "SELECT key, value, updated_at FROM site_settings WHERE key = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Upsert a setting value.
    pub async fn upsert(&self, key: &str, value: &str) -> Result<SiteSettingEntity, sqlx::Error> {
        let timer = QueryTimer::new("upsert_setting");
        let result = sqlx::query_as::<_, SiteSettingEntity>(
            r#"
            INSERT INTO site_settings (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key)
            DO UPDATE SET value = $2, updated_at = NOW()
            RETURNING key, value, updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}
