//! Query-string and identifier parameter types for the poem handlers.
//!
//! Numeric query values are taken as raw strings so that malformed input
//! falls back to defaults instead of rejecting the request.

use poetry_core::error::CoreError;
use poetry_core::pagination::PageRequest;
use poetry_core::search::non_blank;
use poetry_core::types::DbId;
use poetry_db::models::poem::PoemFilter;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// `?page=&limit=&author=&dynasty=&title=&content=` for `GET /list`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub author: Option<String>,
    pub dynasty: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl ListParams {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref())
    }

    /// Blank values impose no constraint.
    pub fn filter(&self) -> PoemFilter {
        PoemFilter {
            author: non_blank(self.author.as_deref()),
            dynasty: non_blank(self.dynasty.as_deref()),
            title: non_blank(self.title.as_deref()),
            content: non_blank(self.content.as_deref()),
        }
    }
}

/// `?keyword=&page=&limit=` for `GET /search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub keyword: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl SearchParams {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref())
    }

    /// The trimmed keyword; blank or missing is a validation error.
    pub fn keyword(&self) -> AppResult<String> {
        non_blank(self.keyword.as_deref()).ok_or_else(|| {
            AppError::Core(CoreError::Validation("keyword is required".into()))
        })
    }
}

/// `?id=` for the `GET /getPoetryById` alias.
#[derive(Debug, Default, Deserialize)]
pub struct IdParams {
    pub id: Option<String>,
}

/// A poem id as clients send it: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Number(DbId),
    Text(String),
}

/// Resolve a required poem id from any input source.
pub fn resolve_id(raw: Option<IdValue>) -> AppResult<DbId> {
    match raw {
        None => Err(AppError::Core(CoreError::Validation("id is required".into()))),
        Some(IdValue::Number(id)) => Ok(id),
        Some(IdValue::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(AppError::Core(CoreError::Validation("id is required".into())));
            }
            text.parse().map_err(|_| {
                AppError::Core(CoreError::Validation(format!(
                    "id must be an integer, got '{text}'"
                )))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn resolve_id_accepts_number_and_numeric_text() {
        assert_eq!(resolve_id(Some(IdValue::Number(5))).unwrap(), 5);
        assert_eq!(resolve_id(Some(IdValue::Text(" 42 ".into()))).unwrap(), 42);
    }

    #[test]
    fn resolve_id_requires_a_value() {
        assert_matches!(
            resolve_id(None),
            Err(AppError::Core(CoreError::Validation(msg))) if msg == "id is required"
        );
        assert_matches!(
            resolve_id(Some(IdValue::Text("".into()))),
            Err(AppError::Core(CoreError::Validation(_)))
        );
    }

    #[test]
    fn resolve_id_rejects_non_numeric_text() {
        assert_matches!(
            resolve_id(Some(IdValue::Text("abc".into()))),
            Err(AppError::Core(CoreError::Validation(msg))) if msg.contains("abc")
        );
    }

    #[test]
    fn id_value_deserializes_from_number_or_string() {
        let n: IdValue = serde_json::from_str("12").unwrap();
        assert_eq!(n, IdValue::Number(12));
        let s: IdValue = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(s, IdValue::Text("12".into()));
    }

    #[test]
    fn list_params_drop_blank_filters() {
        let params = ListParams {
            author: Some("  ".into()),
            dynasty: Some("唐".into()),
            ..Default::default()
        };
        let filter = params.filter();
        assert_eq!(filter.author, None);
        assert_eq!(filter.dynasty.as_deref(), Some("唐"));
    }

    #[test]
    fn list_params_default_to_first_page_of_ten() {
        let params = ListParams {
            page: Some("x".into()),
            ..Default::default()
        };
        assert_eq!(params.page_request(), PageRequest::new(1, 10));
    }

    #[test]
    fn search_keyword_is_trimmed_and_required() {
        let params = SearchParams {
            keyword: Some(" 明月 ".into()),
            ..Default::default()
        };
        assert_eq!(params.keyword().unwrap(), "明月");

        let blank = SearchParams::default();
        assert!(blank.keyword().is_err());
    }
}
