//! Request options and response metadata for paged list endpoints.

use serde::{Deserialize, Serialize};

/// Page size used when a listing does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Largest page size the API accepts.
pub const MAX_PAGE_SIZE: usize = 100;

/// Options sent with every page request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ListOptions {
    /// Page to request; `None` asks for the first page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<usize>,
    /// Items per page. Callers keep it within `1..=MAX_PAGE_SIZE`, see
    /// [`clamp_page_size`].
    pub page_size: usize,
}

impl ListOptions {
    /// Options for the first page with the given page size.
    pub fn with_page_size(page_size: usize) -> Self {
        ListOptions {
            page_number: None,
            page_size,
        }
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        ListOptions {
            page_number: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Clamp a requested page size into `1..=MAX_PAGE_SIZE`.
pub fn clamp_page_size(page_size: usize) -> usize {
    page_size.clamp(1, MAX_PAGE_SIZE)
}

/// Pagination metadata returned with every page.
///
/// `next_page` is `None` exactly when this is the last page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Pagination {
    pub current_page: usize,
    #[serde(default)]
    pub prev_page: Option<usize>,
    #[serde(default)]
    pub next_page: Option<usize>,
    pub total_pages: usize,
    pub total_count: usize,
}

impl Pagination {
    /// Whether this page is the last one.
    pub fn is_last(&self) -> bool {
        self.next_page.is_none()
    }
}

/// One page of results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, pagination: Pagination) -> Self {
        Page { items, pagination }
    }
}
