//! Email unsubscribe entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the email_unsubscribes table.
///
/// Presence of a row suppresses all future notification email to the
/// address. The email column is the primary key and always lowercased.
#[derive(Debug, Clone, FromRow)]
pub struct EmailUnsubscribeEntity {
    pub email: String,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}
