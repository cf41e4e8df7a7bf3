//! Web API module for boardview.
//!
//! Exposes every table view and mutation of the catalog as JSON over HTTP.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::{create_app, create_router};
pub use server::WebServer;
