//! Intercession post domain models.
//!
//! Posts document group prayer events as photo galleries. Image URLs are
//! stored as a single JSON-encoded string column; the codec here keeps the
//! encoding in one place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::validate_not_blank;
use uuid::Uuid;
use validator::Validate;

/// A published (or draft) intercession gallery post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct IntercessionPost {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    /// Ordered list of externally-hosted image URLs.
    pub images: Vec<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

/// Request to create an intercession post.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateIntercessionRequest {
    #[validate(custom(function = "validate_not_blank"))]
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,

    pub date: DateTime<Utc>,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub published: bool,
}

/// Request to fully update an intercession post.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateIntercessionRequest {
    #[validate(custom(function = "validate_not_blank"))]
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,

    pub date: DateTime<Utc>,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub published: bool,
}

/// Request to change only the published flag.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SetPublishedRequest {
    pub published: bool,
}

/// Response wrapper for a single post.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct IntercessionResponse {
    pub intercession: IntercessionPost,
}

/// Response wrapper for post listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListIntercessionsResponse {
    pub posts: Vec<IntercessionPost>,
}

/// Encodes an image URL list for storage.
pub fn encode_images(images: &[String]) -> String {
    serde_json::to_string(images).unwrap_or_else(|_| "[]".to_string())
}

/// Decodes a stored image list, falling back to empty on malformed input.
pub fn decode_images(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images_round_trip() {
        let images = vec![
            "https://cdn.example.com/a.jpg".to_string(),
            "https://cdn.example.com/b.jpg".to_string(),
            "https://cdn.example.com/c.jpg".to_string(),
        ];
        let encoded = encode_images(&images);
        assert_eq!(decode_images(&encoded), images);
    }

    #[test]
    fn test_images_round_trip_preserves_order() {
        let images: Vec<String> = (0..10).map(|i| format!("https://x/{i}.png")).collect();
        assert_eq!(decode_images(&encode_images(&images)), images);
    }

    #[test]
    fn test_encode_empty_list() {
        assert_eq!(encode_images(&[]), "[]");
    }

    #[test]
    fn test_decode_malformed_falls_back_to_empty() {
        assert!(decode_images("not json").is_empty());
        assert!(decode_images("{\"a\": 1}").is_empty());
        assert!(decode_images("").is_empty());
    }

    #[test]
    fn test_create_request_requires_title_and_description() {
        let req = CreateIntercessionRequest {
            title: "  ".to_string(),
            description: "Vigil at the chapel".to_string(),
            date: Utc::now(),
            images: vec![],
            published: false,
        };
        assert!(req.validate().is_err());

        let req = CreateIntercessionRequest {
            title: "Vigil".to_string(),
            description: String::new(),
            date: Utc::now(),
            images: vec![],
            published: false,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_request_defaults() {
        let req: CreateIntercessionRequest = serde_json::from_str(
            r#"{"title": "Vigil", "description": "At the chapel", "date": "2025-06-01T19:00:00Z"}"#,
        )
        .unwrap();
        assert!(req.images.is_empty());
        assert!(!req.published);
        assert!(req.validate().is_ok());
    }
}
