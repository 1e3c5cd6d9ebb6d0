//! Poem entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use poetry_core::patch::{deserialize_patch, Patch};
use poetry_core::types::{DbId, Timestamp};

/// A row from the `poems` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Poem {
    pub id: DbId,
    pub title: String,
    pub author: String,
    pub dynasty: String,
    pub content: String,
    pub translation: Option<String>,
    pub notes: Option<String>,
    /// Comma-joined free-form labels.
    pub tags: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a poem. The four mandatory fields must be non-empty.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePoem {
    pub title: String,
    pub author: String,
    pub dynasty: String,
    pub content: String,
    pub translation: Option<String>,
    pub notes: Option<String>,
    pub tags: Option<String>,
}

/// DTO for a partial update. `None` leaves the column untouched; the
/// nullable columns can also be cleared with `Some(None)`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePoem {
    pub title: Option<String>,
    pub author: Option<String>,
    pub dynasty: Option<String>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    pub translation: Patch<String>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    pub notes: Patch<String>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    pub tags: Patch<String>,
}

impl UpdatePoem {
    /// True when no column would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.dynasty.is_none()
            && self.content.is_none()
            && self.translation.is_none()
            && self.notes.is_none()
            && self.tags.is_none()
    }
}

/// Optional list predicates, combined with AND.
///
/// `author`, `title` and `content` match case-insensitive substrings;
/// `dynasty` must match exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoemFilter {
    pub author: Option<String>,
    pub dynasty: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_update_is_empty() {
        assert!(UpdatePoem::default().is_empty());
    }

    #[test]
    fn update_with_optional_field_is_not_empty() {
        let update = UpdatePoem {
            notes: Some(Some("annotated".into())),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn clearing_an_optional_field_is_not_empty() {
        let update = UpdatePoem {
            notes: Some(None),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
