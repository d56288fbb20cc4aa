//! QR code group domain models.
//!
//! A group is a named attribution tag for a printed QR code. Its slug is
//! derived from the name and distributed in URLs as `?from=<slug>`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::{validate_hex_color, validate_not_blank};
use uuid::Uuid;
use validator::Validate;

/// Default badge color assigned to new groups.
pub const DEFAULT_GROUP_COLOR: &str = "#6366f1";

/// A QR code attribution group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct QrCodeGroup {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub color: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// A group plus the number of prayers attributed to it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct QrCodeGroupWithCount {
    #[serde(flatten)]
    pub group: QrCodeGroup,
    pub prayer_count: i64,
}

/// Request to create a group.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateGroupRequest {
    #[validate(custom(function = "validate_not_blank"))]
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(custom(function = "validate_hex_color"))]
    pub color: Option<String>,
}

/// Request to partially update a group. Renaming re-derives the slug.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateGroupRequest {
    #[validate(custom(function = "validate_not_blank"))]
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(custom(function = "validate_hex_color"))]
    pub color: Option<String>,

    pub active: Option<bool>,
}

/// Response wrapper for a single group.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GroupResponse {
    pub group: QrCodeGroup,
}

/// Response wrapper for the group listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListGroupsResponse {
    pub groups: Vec<QrCodeGroupWithCount>,
}
