//! Pure table projection: filter, sort, paginate.

use super::page::{total_pages, Page};
use super::record::{Record, SortDirection};

/// Static description of a table view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec<F: 'static> {
    /// Columns the search term is matched against.
    pub search_fields: &'static [F],
    /// Records per page.
    pub page_size: usize,
}

impl<F> TableSpec<F> {
    /// Create a view description.
    pub fn new(search_fields: &'static [F], page_size: usize) -> Self {
        Self {
            search_fields,
            page_size,
        }
    }
}

/// A requested sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort<F> {
    /// Column to sort by.
    pub field: F,
    /// Direction.
    pub direction: SortDirection,
}

impl<F> Sort<F> {
    /// Ascending sort on `field`.
    pub fn asc(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    /// Descending sort on `field`.
    pub fn desc(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

/// Parameters of one table query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery<F> {
    /// Search term; empty matches everything.
    pub search: String,
    /// Optional sort. `None` keeps insertion order.
    pub sort: Option<Sort<F>>,
    /// 1-based page number. 0 is treated as 1.
    pub page: usize,
}

impl<F> Default for TableQuery<F> {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: None,
            page: 1,
        }
    }
}

impl<F> TableQuery<F> {
    /// Set the search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the sort.
    pub fn with_sort(mut self, sort: Sort<F>) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set the page number.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}

/// Whether `record` matches the lowercased search term in any of `fields`.
pub fn matches_search<R: Record>(record: &R, fields: &[R::Field], needle: &str) -> bool {
    needle.is_empty()
        || fields
            .iter()
            .any(|&field| record.field(field).contains_lowercase(needle))
}

/// Run `query` over `records` and return the requested page.
///
/// The sort always starts from the order in which `records` yields its
/// items, so ties and unsorted views keep insertion order.
pub fn project<'a, R, I>(records: I, spec: &TableSpec<R::Field>, query: &TableQuery<R::Field>) -> Page<&'a R>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let needle = query.search.to_lowercase();
    let mut rows: Vec<&R> = records
        .into_iter()
        .filter(|record| matches_search(*record, spec.search_fields, &needle))
        .collect();

    if let Some(sort) = query.sort {
        // sort_by is stable
        rows.sort_by(|a, b| {
            sort.direction
                .apply(a.field(sort.field).compare(&b.field(sort.field)))
        });
    }

    let page_size = spec.page_size.max(1);
    let total_count = rows.len();
    let page = query.page.max(1);
    let start = (page - 1).saturating_mul(page_size);

    let items = rows.into_iter().skip(start).take(page_size).collect();

    Page {
        items,
        page,
        page_size,
        total_count,
        total_pages: total_pages(total_count, page_size),
    }
}
