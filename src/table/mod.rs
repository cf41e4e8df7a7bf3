//! Generic table view state.
//!
//! Every listing in the dashboard is the same computation over a different
//! record type: a case-insensitive substring filter over a fixed set of
//! columns, an optional stable sort on one column, and a fixed-size page
//! slice. This module implements it once.
//!
//! - [`Record`] exposes typed columns of a record as [`FieldValue`]s
//! - [`project`] runs a [`TableQuery`] against a collection and returns a [`Page`]
//! - [`TableState`] tracks what the user typed and clicked
//! - [`PageControls`] describes the pagination links

mod page;
mod query;
mod record;
mod state;

pub use page::{page_window, total_pages, Page, PageControls, DEFAULT_PAGE_WINDOW};
pub use query::{matches_search, project, Sort, TableQuery, TableSpec};
pub use record::{FieldValue, Record, SortDirection};
pub use state::TableState;
