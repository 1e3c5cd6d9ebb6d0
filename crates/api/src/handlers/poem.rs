//! Handlers for the `/api/poetry` resource.
//!
//! Each handler extracts and validates its input, probes for the target
//! record where one is addressed by id, calls a single [`PoemStore`]
//! operation, and wraps the result in the [`ApiResponse`] envelope.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use poetry_core::error::CoreError;
use poetry_core::pagination::Pagination;
use poetry_core::patch::{deserialize_patch, Patch};
use poetry_core::types::DbId;
use poetry_core::validation::{empty_fields_error, missing_fields_error};
use poetry_db::models::poem::{CreatePoem, Poem, UpdatePoem};
use poetry_db::repositories::PoemStore;

use crate::error::{AppError, AppResult};
use crate::query::{resolve_id, IdParams, IdValue, ListParams, SearchParams};
use crate::response::{ApiResponse, CreatedId, PageData};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Body of `POST /api/poetry`.
///
/// Every field is optional at the serde level so that missing mandatory
/// fields are reported together by validation instead of as a parse error.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePoemRequest {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub author: Option<String>,
    #[validate(required, length(min = 1))]
    pub dynasty: Option<String>,
    #[validate(required, length(min = 1))]
    pub content: Option<String>,
    pub translation: Option<String>,
    pub notes: Option<String>,
    pub tags: Option<String>,
}

impl CreatePoemRequest {
    /// Validate mandatory fields and convert into the store DTO.
    pub fn into_create(self) -> AppResult<CreatePoem> {
        self.validate()
            .map_err(|errors| AppError::Core(missing_fields_error(&errors)))?;

        let (Some(title), Some(author), Some(dynasty), Some(content)) =
            (self.title, self.author, self.dynasty, self.content)
        else {
            return Err(AppError::Core(CoreError::Validation(
                "missing required fields".into(),
            )));
        };

        Ok(CreatePoem {
            title,
            author,
            dynasty,
            content,
            translation: self.translation,
            notes: self.notes,
            tags: self.tags,
        })
    }
}

/// Body of `POST /api/poetry/updatePoetry`: the target `id` plus the
/// fields to change. `null` clears `translation`, `notes` or `tags`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePoemRequest {
    #[serde(default)]
    pub id: Option<IdValue>,
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub author: Option<String>,
    #[validate(length(min = 1))]
    pub dynasty: Option<String>,
    #[validate(length(min = 1))]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    pub translation: Patch<String>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    pub notes: Patch<String>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    pub tags: Patch<String>,
}

impl UpdatePoemRequest {
    /// Split into the target id and the store DTO.
    ///
    /// Mandatory fields may be omitted but never blanked.
    pub fn into_update(self) -> AppResult<(DbId, UpdatePoem)> {
        let id = resolve_id(self.id.clone())?;
        self.validate()
            .map_err(|errors| AppError::Core(empty_fields_error(&errors)))?;

        Ok((
            id,
            UpdatePoem {
                title: self.title,
                author: self.author,
                dynasty: self.dynasty,
                content: self.content,
                translation: self.translation,
                notes: self.notes,
                tags: self.tags,
            },
        ))
    }
}

/// Body of `POST /api/poetry/deletePoetry`.
#[derive(Debug, Deserialize)]
pub struct DeletePoemRequest {
    #[serde(default)]
    pub id: Option<IdValue>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a poem exists, returning the full row.
async fn ensure_poem_exists(store: &PoemStore, id: DbId) -> AppResult<Poem> {
    store
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Poem", id })
}

// ---------------------------------------------------------------------------
// POST /
// ---------------------------------------------------------------------------

/// Create a poem from the mandatory fields plus optional extras.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreatePoemRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let input = input.into_create()?;

    let id = state.poems.create(&input).await?;
    tracing::info!(id, title = %input.title, author = %input.author, "Poem created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message("Poem created", CreatedId { id })),
    ))
}

// ---------------------------------------------------------------------------
// GET /list
// ---------------------------------------------------------------------------

/// One filtered page of poems plus the pagination block.
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let page = params.page_request();
    let filter = params.filter();

    let list = state.poems.find_all(&page, &filter).await?;
    let total = state.poems.count(&filter).await?;
    tracing::debug!(count = list.len(), total, "Listed poems");

    Ok(Json(ApiResponse::ok(PageData {
        list,
        pagination: Pagination::new(&page, total),
    })))
}

// ---------------------------------------------------------------------------
// GET /search
// ---------------------------------------------------------------------------

/// Keyword search over content, title and author.
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let keyword = params.keyword()?;
    let page = params.page_request();

    let list = state.poems.search(&keyword, &page).await?;
    let total = state.poems.count_search(&keyword).await?;
    tracing::debug!(%keyword, count = list.len(), total, "Searched poems");

    Ok(Json(ApiResponse::ok(PageData {
        list,
        pagination: Pagination::new(&page, total),
    })))
}

// ---------------------------------------------------------------------------
// GET /dynasties, GET /authors
// ---------------------------------------------------------------------------

/// Distinct dynasties, sorted.
pub async fn dynasties(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let dynasties = state.poems.list_dynasties().await?;
    Ok(Json(ApiResponse::ok(dynasties)))
}

/// Distinct authors, sorted.
pub async fn authors(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let authors = state.poems.list_authors().await?;
    Ok(Json(ApiResponse::ok(authors)))
}

// ---------------------------------------------------------------------------
// GET /{id}, GET /getPoetryById?id=
// ---------------------------------------------------------------------------

async fn fetch_poem(state: &AppState, raw: Option<IdValue>) -> AppResult<Json<ApiResponse<Poem>>> {
    let id = resolve_id(raw)?;
    let poem = ensure_poem_exists(&state.poems, id).await?;
    Ok(Json(ApiResponse::ok(poem)))
}

/// Fetch a single poem by path id (canonical form).
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> AppResult<impl IntoResponse> {
    fetch_poem(&state, Some(IdValue::Text(raw))).await
}

/// Fetch a single poem by `?id=`. Alias of [`get_by_id`].
pub async fn get_by_query(
    State(state): State<AppState>,
    params: Result<Query<IdParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    fetch_poem(&state, params.id.map(IdValue::Text)).await
}

// ---------------------------------------------------------------------------
// POST /updatePoetry
// ---------------------------------------------------------------------------

/// Apply a partial update to an existing poem.
pub async fn update(
    State(state): State<AppState>,
    payload: Result<Json<UpdatePoemRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let (id, changes) = input.into_update()?;

    ensure_poem_exists(&state.poems, id).await?;

    // The row can vanish between the probe and the write.
    if !state.poems.update(id, &changes).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Poem updated");
    Ok(Json(ApiResponse::message("Poem updated")))
}

// ---------------------------------------------------------------------------
// POST /deletePoetry
// ---------------------------------------------------------------------------

/// Permanently delete an existing poem.
pub async fn delete(
    State(state): State<AppState>,
    payload: Result<Json<DeletePoemRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let id = resolve_id(input.id)?;

    ensure_poem_exists(&state.poems, id).await?;

    if !state.poems.delete(id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Poem deleted");
    Ok(Json(ApiResponse::message("Poem deleted")))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn create_request(body: serde_json::Value) -> CreatePoemRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn create_request_reports_every_missing_field() {
        let req = create_request(json!({"author": "李白", "content": ""}));
        assert_matches!(
            req.into_create(),
            Err(AppError::Core(CoreError::Validation(msg)))
                if msg == "missing required fields: content, dynasty, title"
        );
    }

    #[test]
    fn create_request_converts_when_complete() {
        let req = create_request(json!({
            "title": "静夜思",
            "author": "李白",
            "dynasty": "唐",
            "content": "床前明月光",
            "notes": "思乡"
        }));
        let poem = req.into_create().unwrap();
        assert_eq!(poem.title, "静夜思");
        assert_eq!(poem.notes.as_deref(), Some("思乡"));
        assert_eq!(poem.tags, None);
    }

    #[test]
    fn update_request_requires_id() {
        let req: UpdatePoemRequest = serde_json::from_value(json!({"title": "T2"})).unwrap();
        assert_matches!(
            req.into_update(),
            Err(AppError::Core(CoreError::Validation(msg))) if msg == "id is required"
        );
    }

    #[test]
    fn update_request_rejects_blanked_mandatory_field() {
        let req: UpdatePoemRequest =
            serde_json::from_value(json!({"id": 3, "author": ""})).unwrap();
        assert_matches!(
            req.into_update(),
            Err(AppError::Core(CoreError::Validation(msg))) if msg.contains("author")
        );
    }

    #[test]
    fn update_request_keeps_only_supplied_fields() {
        let req: UpdatePoemRequest =
            serde_json::from_value(json!({"id": "3", "title": "T2"})).unwrap();
        let (id, changes) = req.into_update().unwrap();
        assert_eq!(id, 3);
        assert_eq!(changes.title.as_deref(), Some("T2"));
        assert!(changes.author.is_none());
        assert!(!changes.is_empty());
    }

    #[test]
    fn update_request_keeps_explicit_null_as_clear() {
        let req: UpdatePoemRequest =
            serde_json::from_value(json!({"id": 3, "notes": null})).unwrap();
        let (_, changes) = req.into_update().unwrap();
        assert_eq!(changes.notes, Some(None));
        assert_eq!(changes.translation, None);
        assert!(!changes.is_empty());
    }
}
