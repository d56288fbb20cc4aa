//! Email unsubscribe repository for database operations.

use sqlx::PgPool;

use crate::entities::EmailUnsubscribeEntity;
use crate::metrics::QueryTimer;

/// Repository for the email unsubscribe list.
#[derive(Clone)]
pub struct UnsubscribeRepository {
    pool: PgPool,
}

impl UnsubscribeRepository {
    /// Creates a new UnsubscribeRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Look up an address on the unsubscribe list (lowercased key).
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<EmailUnsubscribeEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_unsubscribe_by_email");
        let result = sqlx::query_as::<_, EmailUnsubscribeEntity>(
            "SELECT email, reason, created_at FROM email_unsubscribes WHERE email = $1",
        )
        .bind(email.to_lowercase())
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Add an address to the unsubscribe list.
    ///
    /// Idempotent: a concurrent duplicate insert is a no-op.
    pub async fn insert(&self, email: &str, reason: Option<&str>) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("insert_unsubscribe");
        let result = sqlx::query(
            r#"
            INSERT INTO email_unsubscribes (email, reason)
            VALUES ($1, $2)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(email.to_lowercase())
        .bind(reason)
        .execute(&self.pool)
        .await
        .map(|_| ());
        timer.record();
        result
    }
}
