//! Email unsubscribe domain models.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for the public unsubscribe endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UnsubscribeRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    /// The HMAC token from the email link.
    pub token: String,

    #[validate(length(max = 500, message = "Reason must be at most 500 characters"))]
    pub reason: Option<String>,
}

/// Query parameters for checking unsubscribe status.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UnsubscribeStatusQuery {
    pub email: Option<String>,
    pub token: Option<String>,
}

/// Status of an address before confirming the opt-out.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct UnsubscribeStatusResponse {
    pub email: String,
    pub already_unsubscribed: bool,
}

/// Result of an opt-out request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct UnsubscribeResponse {
    pub success: bool,
    pub message: String,
}
