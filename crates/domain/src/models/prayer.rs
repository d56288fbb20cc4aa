//! Prayer domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::validate_not_blank;
use uuid::Uuid;
use validator::Validate;

/// A submitted prayer request, optionally answered by an admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Prayer {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub prayer: String,
    pub prayer_for_other: bool,
    pub other_person_name: Option<String>,
    pub response: Option<String>,
    pub responded_at: Option<DateTime<Utc>>,
    pub notified_by_email: bool,
    /// Raw QR source slug as received from the submission form.
    pub source: Option<String>,
    pub qr_code_group_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Request body for the public prayer submission endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct SubmitPrayerRequest {
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    /// The prayer text. Rejected if empty after trimming.
    #[validate(custom(function = "validate_not_blank"))]
    #[validate(length(max = 5000, message = "Prayer must be at most 5000 characters"))]
    pub prayer: String,

    #[serde(default)]
    pub prayer_for_other: bool,

    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub other_person_name: Option<String>,

    /// QR source slug captured by the client from the `?from=` parameter.
    pub source: Option<String>,
}

/// Response after creating a prayer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SubmitPrayerResponse {
    pub message: String,
    pub prayer: Prayer,
}

/// QR group summary attached to prayers in admin listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PrayerGroupInfo {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub color: String,
}

/// A prayer joined with its QR group summary for the admin dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PrayerWithGroup {
    #[serde(flatten)]
    pub prayer: Prayer,
    pub qr_code_group: Option<PrayerGroupInfo>,
}

/// Response for prayer listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListPrayersResponse {
    pub prayers: Vec<Prayer>,
}

/// Response for the admin prayer listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListPrayersWithGroupResponse {
    pub prayers: Vec<PrayerWithGroup>,
}

/// Request body for attaching a response to a prayer.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct RespondPrayerRequest {
    /// Response text; an empty or missing value clears the response.
    #[validate(length(max = 5000, message = "Response must be at most 5000 characters"))]
    pub response: Option<String>,

    /// Whether to notify the submitter by email.
    #[serde(default)]
    pub send_email: bool,
}

/// Outcome of saving a response, including the best-effort email result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RespondPrayerResponse {
    pub prayer: Prayer,
    /// True only when the notification email was confirmed delivered.
    pub email_sent: bool,
    /// True when the submitter is on the unsubscribe list.
    pub unsubscribed: bool,
}
