//! Store for the `poems` table.
//!
//! All filtering, pagination and keyword search is expressed in SQL here;
//! callers only ever see [`Poem`] rows, counts, and [`StoreError`].

use poetry_core::pagination::PageRequest;
use poetry_core::search::{contains_pattern, TEXT_SEARCH_CONFIG};
use poetry_core::types::DbId;

use crate::error::StoreError;
use crate::models::poem::{CreatePoem, Poem, PoemFilter, UpdatePoem};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, author, dynasty, content, translation, notes, tags, created_at, updated_at";

/// List predicate over binds `$1..$4` (author, dynasty, title, content).
/// A NULL bind disables its clause.
const FILTER_CLAUSE: &str = "\
    ($1::TEXT IS NULL OR author ILIKE $1) \
    AND ($2::TEXT IS NULL OR dynasty = $2) \
    AND ($3::TEXT IS NULL OR title ILIKE $3) \
    AND ($4::TEXT IS NULL OR content ILIKE $4)";

/// Newest first; `id` breaks ties between rows created in the same instant.
const ORDER_NEWEST: &str = "ORDER BY created_at DESC, id DESC";

/// Keyword predicate over `$1` (raw keyword) and `$2` (escaped `%kw%`).
///
/// The full-text arm handles multi-word queries; the substring arms catch
/// CJK text, which the `simple` parser does not split into words.
fn search_clause() -> String {
    format!(
        "(to_tsvector('{TEXT_SEARCH_CONFIG}', content) @@ plainto_tsquery('{TEXT_SEARCH_CONFIG}', $1) \
         OR content ILIKE $2 OR title ILIKE $2 OR author ILIKE $2)"
    )
}

/// Filter values converted to bind parameters, in `FILTER_CLAUSE` order.
struct FilterBinds {
    author: Option<String>,
    dynasty: Option<String>,
    title: Option<String>,
    content: Option<String>,
}

impl From<&PoemFilter> for FilterBinds {
    fn from(filter: &PoemFilter) -> Self {
        Self {
            author: filter.author.as_deref().map(contains_pattern),
            dynasty: filter.dynasty.clone(),
            title: filter.title.as_deref().map(contains_pattern),
            content: filter.content.as_deref().map(contains_pattern),
        }
    }
}

/// Provides CRUD, listing and search over poem records.
///
/// Cheap to clone: the pool is reference-counted.
#[derive(Debug, Clone)]
pub struct PoemStore {
    pool: DbPool,
}

impl PoemStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// The pool this store runs its queries on.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Insert a new poem, returning its generated id.
    ///
    /// `created_at` and `updated_at` both default to the same `NOW()`.
    pub async fn create(&self, input: &CreatePoem) -> Result<DbId, StoreError> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO poems (title, author, dynasty, content, translation, notes, tags)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.author)
        .bind(&input.dynasty)
        .bind(&input.content)
        .bind(&input.translation)
        .bind(&input.notes)
        .bind(&input.tags)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::database("create poem"))
    }

    /// Find a poem by id. Absence is `Ok(None)`.
    pub async fn find_by_id(&self, id: DbId) -> Result<Option<Poem>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM poems WHERE id = $1");
        sqlx::query_as::<_, Poem>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::database("fetch poem"))
    }

    /// One page of poems matching `filter`, newest first.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        filter: &PoemFilter,
    ) -> Result<Vec<Poem>, StoreError> {
        tracing::debug!(
            page = page.page,
            limit = page.limit,
            ?filter,
            "Listing poems"
        );
        let binds = FilterBinds::from(filter);
        let query = format!(
            "SELECT {COLUMNS} FROM poems WHERE {FILTER_CLAUSE} {ORDER_NEWEST} LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, Poem>(&query)
            .bind(binds.author)
            .bind(binds.dynasty)
            .bind(binds.title)
            .bind(binds.content)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::database("list poems"))
    }

    /// Number of poems matching `filter`, ignoring pagination.
    pub async fn count(&self, filter: &PoemFilter) -> Result<i64, StoreError> {
        let binds = FilterBinds::from(filter);
        let query = format!("SELECT COUNT(*) FROM poems WHERE {FILTER_CLAUSE}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(binds.author)
            .bind(binds.dynasty)
            .bind(binds.title)
            .bind(binds.content)
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::database("count poems"))
    }

    /// Apply a partial update. Only supplied fields are written and
    /// `updated_at` is refreshed. A nullable column supplied as `Some(None)`
    /// is set to NULL.
    ///
    /// Returns `false` if no row with `id` exists. An update with no fields
    /// is rejected without touching the database.
    pub async fn update(&self, id: DbId, input: &UpdatePoem) -> Result<bool, StoreError> {
        if input.is_empty() {
            return Err(StoreError::Validation("no fields to update".into()));
        }

        let result = sqlx::query(
            "UPDATE poems SET
                title = COALESCE($2, title),
                author = COALESCE($3, author),
                dynasty = COALESCE($4, dynasty),
                content = COALESCE($5, content),
                translation = CASE WHEN $9 THEN $6 ELSE translation END,
                notes = CASE WHEN $10 THEN $7 ELSE notes END,
                tags = CASE WHEN $11 THEN $8 ELSE tags END,
                updated_at = GREATEST(NOW(), created_at)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.author)
        .bind(&input.dynasty)
        .bind(&input.content)
        .bind(input.translation.clone().flatten())
        .bind(input.notes.clone().flatten())
        .bind(input.tags.clone().flatten())
        .bind(input.translation.is_some())
        .bind(input.notes.is_some())
        .bind(input.tags.is_some())
        .execute(&self.pool)
        .await
        .map_err(StoreError::database("update poem"))?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a poem. Returns `true` if a row was removed.
    pub async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM poems WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::database("delete poem"))?;
        Ok(result.rows_affected() > 0)
    }

    /// One page of poems matching `keyword`, newest first.
    ///
    /// Results are deliberately not ordered by relevance.
    pub async fn search(&self, keyword: &str, page: &PageRequest) -> Result<Vec<Poem>, StoreError> {
        tracing::debug!(keyword, page = page.page, limit = page.limit, "Searching poems");
        let query = format!(
            "SELECT {COLUMNS} FROM poems WHERE {} {ORDER_NEWEST} LIMIT $3 OFFSET $4",
            search_clause()
        );
        sqlx::query_as::<_, Poem>(&query)
            .bind(keyword)
            .bind(contains_pattern(keyword))
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::database("search poems"))
    }

    /// Number of poems matching `keyword`, ignoring pagination.
    pub async fn count_search(&self, keyword: &str) -> Result<i64, StoreError> {
        let query = format!("SELECT COUNT(*) FROM poems WHERE {}", search_clause());
        sqlx::query_scalar::<_, i64>(&query)
            .bind(keyword)
            .bind(contains_pattern(keyword))
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::database("count search results"))
    }

    /// Every distinct dynasty, ascending in pinyin order.
    pub async fn list_dynasties(&self) -> Result<Vec<String>, StoreError> {
        sqlx::query_scalar::<_, String>(
            "SELECT dynasty FROM poems GROUP BY dynasty ORDER BY dynasty COLLATE pinyin",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::database("list dynasties"))
    }

    /// Every distinct author, ascending in pinyin order.
    pub async fn list_authors(&self) -> Result<Vec<String>, StoreError> {
        sqlx::query_scalar::<_, String>(
            "SELECT author FROM poems GROUP BY author ORDER BY author COLLATE pinyin",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::database("list authors"))
    }
}
