//! boardview - searchable, sortable, paginated board tables
//!
//! A bulletin board dashboard backend: boards, posts and users held in
//! memory, each listed through the same filter, sort and page pipeline and
//! served as a JSON Web API.

pub mod board;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod table;
pub mod user;
pub mod validation;
pub mod web;

pub use board::{Board, BoardField, BoardKind, NewBoard, NewPost, Post, PostField};
pub use catalog::{Catalog, Seed, ViewSpecs};
pub use config::Config;
pub use error::{BoardviewError, Result};
pub use table::{
    project, FieldValue, Page, PageControls, Record, Sort, SortDirection, TableQuery, TableSpec,
    TableState,
};
pub use user::{User, UserField, UserStatus, UserUpdate};
pub use validation::{validate_board_url, ValidationError};
pub use web::WebServer;
