//! Dashboard statistics repository.
//!
//! Aggregate counts backing the admin dashboard.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::metrics::QueryTimer;

/// Repository for dashboard aggregate queries.
#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    /// Creates a new DashboardRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Total number of prayers.
    pub async fn count_prayers(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_prayers");
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM prayers")
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Prayers created at or after the given instant.
    pub async fn count_prayers_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_prayers_since");
        let result =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM prayers WHERE created_at >= $1")
                .bind(since)
                .fetch_one(&self.pool)
                .await;
        timer.record();
        result
    }

    /// Total prayers submitted on behalf of another person.
    pub async fn count_prayers_for_others(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_prayers_for_others");
        let result = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM prayers WHERE prayer_for_other = TRUE",
        )
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Prayers for others created at or after the given instant.
    pub async fn count_prayers_for_others_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_prayers_for_others_since");
        let result = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM prayers WHERE prayer_for_other = TRUE AND created_at >= $1",
        )
        .bind(since)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Distinct submitters among prayers for others, keyed by email.
    ///
    /// Anonymous submissions (NULL email) collapse into a single bucket and
    /// count as one, so the figure reads as "people", not "addresses". A
    /// plain COUNT(DISTINCT email) would drop the anonymous bucket.
    pub async fn count_distinct_for_other_emails(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_distinct_for_other_emails");
        let result = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM (SELECT DISTINCT email FROM prayers WHERE prayer_for_other = TRUE) AS submitters",
        )
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Number of published intercession posts.
    pub async fn count_published_intercessions(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_published_intercessions");
        let result = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM intercession_posts WHERE published = TRUE",
        )
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Event date of the most recent published intercession post, if any.
    pub async fn last_published_intercession_date(
        &self,
    ) -> Result<Option<DateTime<Utc>>, sqlx::Error> {
        let timer = QueryTimer::new("last_published_intercession_date");
        let result = sqlx::query_scalar::<_, DateTime<Utc>>(
            "SELECT date FROM intercession_posts WHERE published = TRUE ORDER BY date DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}
