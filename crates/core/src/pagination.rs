//! Page/limit parsing and page-count arithmetic for list endpoints.
//!
//! Query values arrive as raw strings: anything absent, non-numeric or below
//! one falls back to the default instead of failing the request.

use serde::Serialize;

/// Page used when the client sends none.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the client sends none.
pub const DEFAULT_LIMIT: i64 = 10;

/// Largest page size a client may request.
pub const MAX_LIMIT: i64 = 100;

/// Parse a positive integer, falling back to `default` on anything else.
pub fn parse_positive(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(default)
}

/// A validated page request. `page` and `limit` are always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// Build a page request, clamping `limit` to [`MAX_LIMIT`].
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Build a page request from raw query-string values.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(
            parse_positive(page, DEFAULT_PAGE),
            parse_positive(limit, DEFAULT_LIMIT),
        )
    }

    /// Number of rows to skip: `(page - 1) * limit`.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

/// `ceil(total / limit)`; zero rows means zero pages.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total <= 0 || limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

/// Pagination block returned alongside every paged list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
}

impl Pagination {
    pub fn new(request: &PageRequest, total: i64) -> Self {
        Self {
            page: request.page,
            limit: request.limit,
            total,
            pages: total_pages(total, request.limit),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
