use serde::Serialize;

/// Page size used when the caller does not supply a usable one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// 1-based page selection.
///
/// `page` is kept signed because it comes straight from user input; pages
/// below 1 resolve to an offset of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub per_page: usize,
}

impl Pagination {
    /// Rows to skip: `(page - 1) * per_page`, never negative.
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.limit()).max(0)
    }

    /// Page size as a SQL `LIMIT`; sizes beyond `i64::MAX` saturate.
    pub fn limit(&self) -> i64 {
        i64::try_from(self.per_page).unwrap_or(i64::MAX)
    }
}

/// Number of pages needed to show `total` items, `per_page` at a time.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// A page of items together with the numbers a client needs to paginate.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, pagination: Pagination, total: usize) -> Self {
        Self {
            items,
            page: pagination.page,
            total,
            total_pages: total_pages(total, pagination.per_page),
        }
    }
}
