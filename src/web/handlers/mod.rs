//! API handlers for the Web API.

pub mod admin;
pub mod board;

pub use admin::*;
pub use board::*;

use tokio::sync::Mutex;

use crate::catalog::Catalog;

/// Shared state handed to every handler.
pub struct AppState {
    /// Catalog (wrapped in Mutex for thread safety).
    pub catalog: Mutex<Catalog>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Mutex::new(catalog),
        }
    }
}

impl From<Catalog> for AppState {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}
