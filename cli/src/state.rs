//! Browse state: active filters plus pagination.
//!
//! All mutation goes through [`BrowseState`] methods so the invariant holds
//! everywhere: changing any filter criterion moves the viewer back to page 1
//! (the old page position is meaningless against a new result set).

use vaga_link::JobFilter;

/// Pagination state for the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    /// 1-based page currently shown
    pub current_page: u64,

    /// Total matching rows reported by the last successful load
    pub total_count: u64,

    /// Rows per page
    pub page_size: u64,
}

impl PageState {
    pub fn new(page_size: u64) -> Self {
        Self {
            current_page: 1,
            total_count: 0,
            page_size: page_size.max(1),
        }
    }

    /// Number of pages for the current total (0 when there are no rows)
    pub fn total_pages(&self) -> u64 {
        self.total_count.div_ceil(self.page_size)
    }

    /// Clamp a requested page into `[1, max(1, total_pages)]`
    pub fn clamp_page(&self, page: u64) -> u64 {
        page.clamp(1, self.total_pages().max(1))
    }
}

/// Filters plus pagination, owned by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    pub filters: JobFilter,
    pub page: PageState,
}

impl BrowseState {
    pub fn new(page_size: u64) -> Self {
        Self {
            filters: JobFilter::default(),
            page: PageState::new(page_size),
        }
    }

    /// Update the free-text search
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filters.search = text.into();
        self.page.current_page = 1;
    }

    /// Update the location filter
    pub fn set_location(&mut self, location: impl Into<String>) {
        self.filters.location = location.into();
        self.page.current_page = 1;
    }

    /// Update the company filter
    pub fn set_company(&mut self, company: impl Into<String>) {
        self.filters.company = company.into();
        self.page.current_page = 1;
    }

    /// Update the salary bounds
    pub fn set_salary(&mut self, min: impl Into<String>, max: impl Into<String>) {
        self.filters.min_salary = min.into();
        self.filters.max_salary = max.into();
        self.page.current_page = 1;
    }

    /// Reset every filter and return to the first page
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page.current_page = 1;
    }
}
