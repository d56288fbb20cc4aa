//! Prayer repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{PrayerEntity, PrayerWithGroupEntity};
use crate::metrics::QueryTimer;

const PRAYER_COLUMNS: &str = "id, name, email, prayer, prayer_for_other, other_person_name, \
                              response, responded_at, notified_by_email, source, \
                              qr_code_group_id, created_at";

/// Input for creating a prayer.
#[derive(Debug, Clone)]
pub struct NewPrayer {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Already trimmed by the caller.
    pub prayer: String,
    pub prayer_for_other: bool,
    pub other_person_name: Option<String>,
    pub source: Option<String>,
    pub qr_code_group_id: Option<Uuid>,
}

/// Repository for prayer-related database operations.
#[derive(Clone)]
pub struct PrayerRepository {
    pool: PgPool,
}

impl PrayerRepository {
    /// Creates a new PrayerRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new prayer.
    pub async fn create(&self, input: NewPrayer) -> Result<PrayerEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_prayer");
        let result = sqlx::query_as::<_, PrayerEntity>(&format!(
            r#"
            INSERT INTO prayers (name, email, prayer, prayer_for_other, other_person_name,
                                 source, qr_code_group_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {PRAYER_COLUMNS}
            "#,
        ))
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.prayer)
        .bind(input.prayer_for_other)
        .bind(&input.other_person_name)
        .bind(&input.source)
        .bind(input.qr_code_group_id)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List a submitter's prayers, newest first.
    pub async fn list_by_email(&self, email: &str) -> Result<Vec<PrayerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_prayers_by_email");
        let result = sqlx::query_as::<_, PrayerEntity>(&format!(
            r#"
            SELECT {PRAYER_COLUMNS}
            FROM prayers
            WHERE email = $1
            ORDER BY created_at DESC
            "#,
        ))
        .bind(email)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List all prayers joined with their QR group summary, newest first.
    pub async fn list_all_with_group(&self) -> Result<Vec<PrayerWithGroupEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_prayers_with_group");
        let result = sqlx::query_as::<_, PrayerWithGroupEntity>(
            r#"
            SELECT p.id, p.name, p.email, p.prayer, p.prayer_for_other, p.other_person_name,
                   p.response, p.responded_at, p.notified_by_email, p.source,
                   p.qr_code_group_id, p.created_at,
                   g.name AS group_name, g.slug AS group_slug, g.color AS group_color
            FROM prayers p
            LEFT JOIN qr_code_groups g ON p.qr_code_group_id = g.id
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a prayer by id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<PrayerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_prayer_by_id");
        let result = sqlx::query_as::<_, PrayerEntity>(&format!(
            "SELECT {PRAYER_COLUMNS} FROM prayers WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update a prayer's response.
    ///
    /// `responded_at` follows the response: set when non-empty, cleared when
    /// the response is emptied. The notified flag is reset on every edit and
    /// only set again by [`Self::set_notified`] after a confirmed delivery.
    pub async fn update_response(
        &self,
        id: Uuid,
        response: Option<&str>,
    ) -> Result<Option<PrayerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_prayer_response");
        let result = sqlx::query_as::<_, PrayerEntity>(&format!(
            r#"
            UPDATE prayers
            SET response = $2,
                responded_at = CASE WHEN $2 IS NULL THEN NULL ELSE NOW() END,
                notified_by_email = FALSE
            WHERE id = $1
            RETURNING {PRAYER_COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(response)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Mark a prayer as notified after a confirmed email delivery.
    pub async fn set_notified(&self, id: Uuid, notified: bool) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("set_prayer_notified");
        let result = sqlx::query("UPDATE prayers SET notified_by_email = $2 WHERE id = $1")
            .bind(id)
            .bind(notified)
            .execute(&self.pool)
            .await
            .map(|_| ());
        timer.record();
        result
    }

    /// Delete a prayer. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_prayer");
        let result = sqlx::query("DELETE FROM prayers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected() > 0);
        timer.record();
        result
    }
}
