//! Page results and page-control computation.

use serde::Serialize;

/// Default number of page links shown around the current page.
pub const DEFAULT_PAGE_WINDOW: usize = 5;

/// Number of pages needed for `count` items.
///
/// Zero items give zero pages; the controls still render one disabled page.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Page numbers to display: up to `width` numbers centered on `current`,
/// with numbers outside `1..=total_pages` dropped rather than shifted in.
///
/// A `total_pages` of zero is treated as a single page.
pub fn page_window(current: usize, total_pages: usize, width: usize) -> Vec<usize> {
    let total = total_pages.max(1);
    let width = width.max(1);
    let current = current.clamp(1, total);

    let before = width / 2;
    let after = width - 1 - before;
    let start = current.saturating_sub(before).max(1);
    let end = current.saturating_add(after).min(total);

    (start..=end).collect()
}

/// One page of a filtered and sorted collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Records on this page, at most `page_size` of them.
    pub items: Vec<T>,
    /// 1-based page number.
    pub page: usize,
    /// Page size of the view.
    pub page_size: usize,
    /// Number of records that passed the filter.
    pub total_count: usize,
    /// `ceil(total_count / page_size)`.
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Transform the records while keeping the paging metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: self.total_pages,
        }
    }

    /// Whether this page has no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Page controls for this page.
    pub fn controls(&self, window: usize) -> PageControls {
        PageControls::new(self.page, self.total_pages, window)
    }
}

/// State of the pagination links under a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageControls {
    /// Page numbers to render as links.
    pub pages: Vec<usize>,
    /// Current page.
    pub current: usize,
    /// Whether the "previous" button is enabled.
    pub has_prev: bool,
    /// Whether the "next" button is enabled.
    pub has_next: bool,
    /// True when there is nothing to page through.
    pub disabled: bool,
}

impl PageControls {
    /// Compute controls for `current` out of `total_pages`.
    pub fn new(current: usize, total_pages: usize, window: usize) -> Self {
        let disabled = total_pages == 0;
        let current = current.max(1);
        Self {
            pages: page_window(current, total_pages, window),
            current,
            has_prev: !disabled && current > 1,
            has_next: !disabled && current < total_pages,
            disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(100, 20), 5);
        assert_eq!(total_pages(100, 30), 4);
    }

    #[test]
    fn test_page_window_at_start() {
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3]);
        assert_eq!(page_window(2, 10, 5), vec![1, 2, 3, 4]);
        assert_eq!(page_window(3, 10, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_page_window_centered() {
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_page_window_at_end() {
        assert_eq!(page_window(10, 10, 5), vec![8, 9, 10]);
        assert_eq!(page_window(9, 10, 5), vec![7, 8, 9, 10]);
    }

    #[test]
    fn test_page_window_fewer_pages_than_width() {
        assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_window(1, 0, 5), vec![1]);
    }

    #[test]
    fn test_page_window_clamps_current() {
        assert_eq!(page_window(0, 10, 5), vec![1, 2, 3]);
        assert_eq!(page_window(99, 10, 5), vec![8, 9, 10]);
    }

    #[test]
    fn test_page_window_even_width() {
        assert_eq!(page_window(5, 10, 4), vec![3, 4, 5, 6]);
        assert_eq!(page_window(5, 10, 1), vec![5]);
        assert_eq!(page_window(5, 10, 0), vec![5]);
    }

    #[test]
    fn test_controls_empty_result() {
        let controls = PageControls::new(1, 0, DEFAULT_PAGE_WINDOW);
        assert!(controls.disabled);
        assert_eq!(controls.pages, vec![1]);
        assert!(!controls.has_prev);
        assert!(!controls.has_next);
    }

    #[test]
    fn test_controls_middle_page() {
        let controls = PageControls::new(3, 5, DEFAULT_PAGE_WINDOW);
        assert!(!controls.disabled);
        assert!(controls.has_prev);
        assert!(controls.has_next);
        assert_eq!(controls.pages, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_controls_last_page() {
        let controls = PageControls::new(5, 5, DEFAULT_PAGE_WINDOW);
        assert!(controls.has_prev);
        assert!(!controls.has_next);
    }

    #[test]
    fn test_page_map() {
        let page = Page {
            items: vec![1, 2, 3],
            page: 2,
            page_size: 3,
            total_count: 8,
            total_pages: 3,
        };
        let mapped = page.map(|n| n * 10);
        assert_eq!(mapped.items, vec![10, 20, 30]);
        assert_eq!(mapped.page, 2);
        assert_eq!(mapped.total_count, 8);
        assert!(!mapped.is_empty());
    }
}
