//! Page normalization and response envelope for paginated listings.

use serde::Serialize;

/// Page used when none (or a non-positive one) is requested.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when none (or a non-positive one) is requested.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Largest page size a client may request.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// A normalized page request: `page >= 1`, `1 <= limit <= MAX_PAGE_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// Normalize raw client values.
    ///
    /// - page <= 0 or absent -> 1
    /// - limit <= 0 or absent -> 10
    /// - limit > 100 -> 100
    pub fn normalize(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p > 0 => p,
            _ => DEFAULT_PAGE,
        };
        let limit = match limit {
            Some(l) if l > 0 => l.min(MAX_PAGE_LIMIT),
            _ => DEFAULT_PAGE_LIMIT,
        };
        Self { page, limit }
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// `ceil(total / limit)`; zero when there is nothing to page over.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total <= 0 || limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

/// Pagination metadata returned alongside a page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub current_page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(request: PageRequest, total: i64) -> Self {
        Self {
            current_page: request.page,
            per_page: request.limit,
            total,
            total_pages: total_pages(total, request.limit),
        }
    }
}

/// `{ "data": [...], "pagination": {...} }` response body.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T: Serialize> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}
