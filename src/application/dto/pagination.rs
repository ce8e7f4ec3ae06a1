use crate::application::error::{ApplicationError, ApplicationResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MAX_PAGE_SIZE: u64 = 1000;

/// Page-number pagination request. `page` is 1-based; a missing or zero
/// `page_size` falls back to the per-resource default.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    #[serde(default = "first_page")]
    pub page: u64,
    #[serde(default)]
    pub page_size: Option<u64>,
}

fn first_page() -> u64 {
    1
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: None,
        }
    }
}

impl PageParams {
    pub fn effective_size(&self, default_size: u64) -> u64 {
        match self.page_size {
            Some(0) | None => default_size,
            Some(size) => size.min(MAX_PAGE_SIZE),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_count: u64,
    pub next: Option<u64>,
    pub previous: Option<u64>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Assemble the envelope for one page slice. `results` must already be
    /// the slice for `page` at `page_size`.
    pub fn from_parts(results: Vec<T>, page: u64, page_size: u64, total_count: u64) -> Self {
        let total_pages = total_pages(total_count, page_size);
        let next = (page < total_pages).then(|| page + 1);
        let previous = (page > 1).then(|| page - 1);
        Self {
            current_page: page,
            total_pages,
            total_count,
            next,
            previous,
            results,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_count: self.total_count,
            next: self.next,
            previous: self.previous,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}

/// An empty listing still has one (empty) page.
pub fn total_pages(total_count: u64, page_size: u64) -> u64 {
    total_count.div_ceil(page_size).max(1)
}

/// Validate the requested page against the total and return the row offset
/// of its first element.
pub fn page_offset(page: u64, page_size: u64, total_count: u64) -> ApplicationResult<u64> {
    if page == 0 || page > total_pages(total_count, page_size) {
        return Err(ApplicationError::not_found("invalid page"));
    }
    Ok((page - 1) * page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifteen_records_at_ten_per_page_need_two_pages() {
        let page = Page::from_parts(vec![(); 10], 1, 10, 15);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.next, Some(2));
        assert_eq!(page.previous, None);
        assert_eq!(page.results.len(), 10);
    }

    #[test]
    fn last_page_has_no_next() {
        let page = Page::from_parts(vec![(); 5], 2, 10, 15);
        assert_eq!(page.next, None);
        assert_eq!(page.previous, Some(1));
    }

    #[test]
    fn page_size_beyond_records_yields_no_next() {
        let page = Page::from_parts(vec![(); 15], 1, 100, 15);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.next, None);
    }

    #[test]
    fn empty_listing_is_a_single_page() {
        let page = Page::<()>::from_parts(vec![], 1, 10, 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.next, None);
        assert_eq!(page.previous, None);
    }

    #[test]
    fn offset_rejects_out_of_range_pages() {
        assert!(page_offset(0, 10, 15).is_err());
        assert!(page_offset(3, 10, 15).is_err());
        assert_eq!(page_offset(2, 10, 15).unwrap(), 10);
    }

    #[test]
    fn effective_size_caps_at_maximum() {
        let params = PageParams {
            page: 1,
            page_size: Some(5000),
        };
        assert_eq!(params.effective_size(10), MAX_PAGE_SIZE);
        assert_eq!(PageParams::default().effective_size(20), 20);
    }
}
