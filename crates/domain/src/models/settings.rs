//! Site settings domain models.
//!
//! Settings are key/value pairs; the only consumer today is the verse
//! displayed on the public submission page.

use serde::{Deserialize, Serialize};
use shared::validation::validate_not_blank;
use validator::Validate;

/// Setting key for the displayed verse text.
pub const VERSE_TEXT_KEY: &str = "verse_text";
/// Setting key for the displayed verse reference.
pub const VERSE_REFERENCE_KEY: &str = "verse_reference";

/// Fallback verse shown before an admin edits it.
pub const DEFAULT_VERSE_TEXT: &str = "Não andeis ansiosos por coisa alguma; antes em tudo sejam \
os vossos pedidos conhecidos diante de Deus pela oração e súplica com ações de graças.";
/// Fallback verse reference.
pub const DEFAULT_VERSE_REFERENCE: &str = "Filipenses 4:6";

/// The verse shown on the public page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Verse {
    pub text: String,
    pub reference: String,
}

impl Default for Verse {
    fn default() -> Self {
        Self {
            text: DEFAULT_VERSE_TEXT.to_string(),
            reference: DEFAULT_VERSE_REFERENCE.to_string(),
        }
    }
}

/// Response wrapper for the verse endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct VerseResponse {
    pub verse: Verse,
}

/// Request to update the displayed verse.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateVerseRequest {
    #[validate(custom(function = "validate_not_blank"))]
    #[validate(length(max = 1000, message = "Verse text must be at most 1000 characters"))]
    pub text: String,

    #[validate(custom(function = "validate_not_blank"))]
    #[validate(length(max = 100, message = "Reference must be at most 100 characters"))]
    pub reference: String,
}
