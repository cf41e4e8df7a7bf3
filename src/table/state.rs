//! Interactive table parameters.
//!
//! [`TableState`] holds only parameter values; the page itself is always
//! recomputed from the full collection with [`project`](super::project).

use super::query::{Sort, TableQuery};
use super::record::SortDirection;

/// Search, sort and page parameters of one table view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState<F> {
    search: String,
    sort: Option<Sort<F>>,
    page: usize,
}

impl<F> Default for TableState<F> {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: None,
            page: 1,
        }
    }
}

impl<F: Copy + Eq> TableState<F> {
    /// Fresh state: no search, insertion order, first page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Search term currently in the search box.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Active sort, if any.
    pub fn sort(&self) -> Option<Sort<F>> {
        self.sort
    }

    /// Current page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Update the search term as it is typed. Filtering follows the input
    /// immediately; the current page is kept.
    pub fn set_search_input(&mut self, input: impl Into<String>) {
        self.search = input.into();
    }

    /// Search submission: go back to the first page.
    pub fn submit_search(&mut self) {
        self.page = 1;
    }

    /// Column header click: flip the direction of the active column,
    /// or sort a new column ascending.
    pub fn toggle_sort(&mut self, field: F) {
        self.sort = Some(match self.sort {
            Some(sort) if sort.field == field => Sort {
                field,
                direction: sort.direction.toggled(),
            },
            _ => Sort::asc(field),
        });
    }

    /// Set an explicit sort.
    pub fn set_sort(&mut self, field: F, direction: SortDirection) {
        self.sort = Some(Sort { field, direction });
    }

    /// Return to insertion order.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Jump to a page. Page 0 becomes page 1.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Previous page, stopping at 1.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Next page, stopping at `total_pages`.
    pub fn next_page(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
        }
    }

    /// The pure query for the current parameters.
    pub fn query(&self) -> TableQuery<F> {
        TableQuery {
            search: self.search.clone(),
            sort: self.sort,
            page: self.page,
        }
    }
}
