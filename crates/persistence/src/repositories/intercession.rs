//! Intercession post repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::IntercessionPostEntity;
use crate::metrics::QueryTimer;

const POST_COLUMNS: &str = "id, title, description, date, images, published, created_at";

/// Repository for intercession post database operations.
#[derive(Clone)]
pub struct IntercessionRepository {
    pool: PgPool,
}

impl IntercessionRepository {
    /// Creates a new IntercessionRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new post. `images` is the pre-encoded JSON string.
    pub async fn create(
        &self,
        title: &str,
        description: &str,
        date: DateTime<Utc>,
        images: &str,
        published: bool,
    ) -> Result<IntercessionPostEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_intercession");
        let result = sqlx::query_as::<_, IntercessionPostEntity>(&format!(
            r#"
            INSERT INTO intercession_posts (title, description, date, images, published)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {POST_COLUMNS}
            "#,
        ))
        .bind(title)
        .bind(description)
        .bind(date)
        .bind(images)
        .bind(published)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List published posts by event date, newest first, optionally limited.
    pub async fn list_published(
        &self,
        limit: Option<i64>,
    ) -> Result<Vec<IntercessionPostEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_published_intercessions");
        let result = sqlx::query_as::<_, IntercessionPostEntity>(&format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM intercession_posts
            WHERE published = TRUE
            ORDER BY date DESC
            LIMIT $1
            "#,
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List all posts (published or not) by event date, newest first.
    pub async fn list_all(&self) -> Result<Vec<IntercessionPostEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_all_intercessions");
        let result = sqlx::query_as::<_, IntercessionPostEntity>(&format!(
            "SELECT {POST_COLUMNS} FROM intercession_posts ORDER BY date DESC",
        ))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a post by id.
    pub async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<IntercessionPostEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_intercession_by_id");
        let result = sqlx::query_as::<_, IntercessionPostEntity>(&format!(
            "SELECT {POST_COLUMNS} FROM intercession_posts WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Full update of a post. `images` is the pre-encoded JSON string.
    pub async fn update(
        &self,
        id: Uuid,
        title: &str,
        description: &str,
        date: DateTime<Utc>,
        images: &str,
        published: bool,
    ) -> Result<Option<IntercessionPostEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_intercession");
        let result = sqlx::query_as::<_, IntercessionPostEntity>(&format!(
            r#"
            UPDATE intercession_posts
            SET title = $2, description = $3, date = $4, images = $5, published = $6
            WHERE id = $1
            RETURNING {POST_COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(date)
        .bind(images)
        .bind(published)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Toggle only the published flag.
    pub async fn set_published(
        &self,
        id: Uuid,
        published: bool,
    ) -> Result<Option<IntercessionPostEntity>, sqlx::Error> {
        let timer = QueryTimer::new("set_intercession_published");
        let result = sqlx::query_as::<_, IntercessionPostEntity>(&format!(
            r#"
            UPDATE intercession_posts
            SET published = $2
            WHERE id = $1
            RETURNING {POST_COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(published)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a post. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_intercession");
        let result = sqlx::query("DELETE FROM intercession_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected() > 0);
        timer.record();
        result
    }
}
