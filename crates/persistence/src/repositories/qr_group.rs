//! QR code group repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{QrCodeGroupEntity, QrCodeGroupWithCountEntity};
use crate::metrics::QueryTimer;

const GROUP_COLUMNS: &str = "id, name, slug, description, color, active, created_at";

/// Repository for QR code group database operations.
#[derive(Clone)]
pub struct QrGroupRepository {
    pool: PgPool,
}

impl QrGroupRepository {
    /// Creates a new QrGroupRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new group. A duplicate slug surfaces as a unique violation.
    pub async fn create(
        &self,
        name: &str,
        slug: &str,
        description: Option<&str>,
        color: &str,
    ) -> Result<QrCodeGroupEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_qr_group");
        let result = sqlx::query_as::<_, QrCodeGroupEntity>(&format!(
            r#"
            INSERT INTO qr_code_groups (name, slug, description, color)
            VALUES ($1, $2, $3, $4)
            RETURNING {GROUP_COLUMNS}
            "#,
        ))
        .bind(name)
        .bind(slug)
        .bind(description)
        .bind(color)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List all groups with their linked prayer counts, newest first.
    pub async fn list_with_counts(
        &self,
    ) -> Result<Vec<QrCodeGroupWithCountEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_qr_groups_with_counts");
        let result = sqlx::query_as::<_, QrCodeGroupWithCountEntity>(
            r#"
            SELECT g.id, g.name, g.slug, g.description, g.color, g.active, g.created_at,
                   COUNT(p.id) AS prayer_count
            FROM qr_code_groups g
            LEFT JOIN prayers p ON p.qr_code_group_id = g.id
            GROUP BY g.id
            ORDER BY g.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a group by id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<QrCodeGroupEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_qr_group_by_id");
        let result = sqlx::query_as::<_, QrCodeGroupEntity>(&format!(
            "SELECT {GROUP_COLUMNS} FROM qr_code_groups WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Resolve an active group by its slug, used for submission attribution.
    pub async fn find_active_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<QrCodeGroupEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_qr_group_by_slug");
        let result = sqlx::query_as::<_, QrCodeGroupEntity>(&format!(
            "SELECT {GROUP_COLUMNS} FROM qr_code_groups WHERE slug = $1 AND active = TRUE",
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Full update of a group; callers compute the merged field values.
    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        slug: &str,
        description: Option<&str>,
        color: &str,
        active: bool,
    ) -> Result<Option<QrCodeGroupEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_qr_group");
        let result = sqlx::query_as::<_, QrCodeGroupEntity>(&format!(
            r#"
            UPDATE qr_code_groups
            SET name = $2, slug = $3, description = $4, color = $5, active = $6
            WHERE id = $1
            RETURNING {GROUP_COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(name)
        .bind(slug)
        .bind(description)
        .bind(color)
        .bind(active)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Count prayers referencing a group, used to block deletion.
    pub async fn count_linked_prayers(&self, id: Uuid) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_linked_prayers");
        let result =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM prayers WHERE qr_code_group_id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await;
        timer.record();
        result
    }

    /// Delete a group. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_qr_group");
        let result = sqlx::query("DELETE FROM qr_code_groups WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected() > 0);
        timer.record();
        result
    }
}
