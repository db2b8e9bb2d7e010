// src/pagination.rs

//! Page-number pagination over ordered result sets
//!
//! A [`PageRequest`] is always valid: out-of-range or malformed inputs are
//! clamped when the request is built. Asking for a page past the last one
//! yields an empty page whose metadata is still consistent; it is not an
//! error.

use crate::error::Result;
use serde::Serialize;
use tracing::debug;

/// Page size used when the caller does not ask for one
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Largest page size honoured by default
pub const MAX_PER_PAGE: u32 = 100;

/// Bounds applied to requested page sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_per_page: u32,
    pub max_per_page: u32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: MAX_PER_PAGE,
        }
    }
}

/// A validated request for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    /// Build a request, clamping `page` to at least 1 and `per_page` to
    /// `1..=MAX_PER_PAGE`
    pub fn new(page: u32, per_page: u32) -> Self {
        Self::with_limits(page, per_page, &PageLimits::default())
    }

    /// Build a request, clamping `per_page` to the given limits
    pub fn with_limits(page: u32, per_page: u32, limits: &PageLimits) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, limits.max_per_page.max(1)),
        }
    }

    /// Build a request from raw query-string values
    ///
    /// Missing values take the defaults; values that do not parse as
    /// integers fall back to the defaults; zero or negative values are
    /// clamped to the lower bound.
    pub fn from_query(page: Option<&str>, per_page: Option<&str>, limits: &PageLimits) -> Self {
        let page = parse_param("page", page, 1);
        let per_page = parse_param("per_page", per_page, i64::from(limits.default_per_page));

        let clamp = |value: i64| u32::try_from(value.max(1)).unwrap_or(u32::MAX);
        Self::with_limits(clamp(page), clamp(per_page), limits)
    }

    /// Requested 1-indexed page
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Items per page
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Number of items preceding this page
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    /// Paginate a store-backed result set
    ///
    /// `total` is the size of the full ordered set; `fetch(limit, offset)`
    /// returns the window. `fetch` is not called when the page lies past
    /// the end of the set.
    pub fn paginate<T, F>(self, total: u64, fetch: F) -> Result<Page<T>>
    where
        F: FnOnce(u32, u64) -> Result<Vec<T>>,
    {
        let items = if self.offset() < total {
            fetch(self.per_page, self.offset())?
        } else {
            Vec::new()
        };

        Ok(Page::new(items, self, total))
    }

    /// Paginate an ordered in-memory slice
    pub fn slice<T: Clone>(self, items: &[T]) -> Page<T> {
        let total = items.len() as u64;
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let window = items
            .iter()
            .skip(start)
            .take(self.per_page as usize)
            .cloned()
            .collect();

        Page::new(window, self, total)
    }
}

fn parse_param(name: &str, raw: Option<&str>, default: i64) -> i64 {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            debug!("Ignoring malformed {} parameter '{}'", name, raw);
            default
        }),
    }
}

/// Page envelope returned by paginated listings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> Page<T> {
    /// Assemble the envelope for `items` taken from a set of `total` entries
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        let pages = total.div_ceil(u64::from(request.per_page)).max(1);
        let page = request.page;

        Self {
            items,
            page,
            per_page: request.per_page,
            total,
            pages,
            has_next: u64::from(page) < pages,
            has_prev: page > 1,
        }
    }

    /// Convert every item, keeping the metadata
    pub fn try_map<U, E, F>(self, f: F) -> std::result::Result<Page<U>, E>
    where
        F: FnMut(T) -> std::result::Result<U, E>,
    {
        let items = self.items.into_iter().map(f).collect::<std::result::Result<_, _>>()?;

        Ok(Page {
            items,
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            pages: self.pages,
            has_next: self.has_next,
            has_prev: self.has_prev,
        })
    }

    /// Page number of the previous page, if any
    pub fn prev_page(&self) -> Option<u32> {
        self.has_prev.then(|| self.page - 1)
    }

    /// Page number of the next page, if any
    pub fn next_page(&self) -> Option<u32> {
        self.has_next.then(|| self.page + 1)
    }
}
