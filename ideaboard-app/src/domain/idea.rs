use chrono::{DateTime, Utc};
use ideaboard_errors::AppError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum idea length in characters, counted on the raw (untrimmed)
/// submission.
pub const MAX_IDEA_CHARS: usize = 280;

/// A single community idea with its popularity counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    pub id: Uuid,
    pub text: String,
    pub upvotes: i32,
    pub created_at: DateTime<Utc>,
}

impl Idea {
    /// Fresh record for already-validated text: new id, zero upvotes,
    /// stamped now.
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            upvotes: 0,
            created_at: Utc::now(),
        }
    }
}

/// Checks submission text and returns the trimmed form that gets stored.
///
/// Emptiness is judged on the trimmed text; the 280-character cap is
/// judged on the raw text, so surrounding whitespace counts toward the
/// limit.
pub fn validate_idea_text(raw: &str) -> Result<String, AppError> {
    if raw.trim().is_empty() {
        return Err(AppError::Validation("Idea text is required".to_string()));
    }

    if raw.chars().count() > MAX_IDEA_CHARS {
        return Err(AppError::Validation(
            "Idea text must be 280 characters or less".to_string(),
        ));
    }

    Ok(raw.trim().to_string())
}
