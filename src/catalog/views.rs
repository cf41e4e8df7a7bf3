//! The four listing views and the columns they search.

use crate::board::{BoardField, PostField};
use crate::config::ListingConfig;
use crate::table::TableSpec;
use crate::user::UserField;

/// Columns searched on a public board's post list.
pub const BOARD_POST_SEARCH: &[PostField] = &[PostField::Title, PostField::Author];

/// Columns searched on the admin post list.
pub const ADMIN_POST_SEARCH: &[PostField] = &[PostField::Title, PostField::Author];

/// Columns searched on the admin user list.
pub const USER_SEARCH: &[UserField] = &[UserField::Id, UserField::Name, UserField::Email];

/// Columns searched on the admin board list.
pub const ADMIN_BOARD_SEARCH: &[BoardField] = &[
    BoardField::Title,
    BoardField::Author,
    BoardField::Kind,
    BoardField::Id,
];

/// View definitions for every listing.
#[derive(Debug, Clone)]
pub struct ViewSpecs {
    /// Public board post list.
    pub board_posts: TableSpec<PostField>,
    /// Admin post list.
    pub admin_posts: TableSpec<PostField>,
    /// Admin user list.
    pub users: TableSpec<UserField>,
    /// Admin board list.
    pub admin_boards: TableSpec<BoardField>,
    /// Page-link window width.
    pub page_window: usize,
}

impl ViewSpecs {
    /// Build view definitions from the listing configuration.
    pub fn from_config(config: &ListingConfig) -> Self {
        Self {
            board_posts: TableSpec::new(BOARD_POST_SEARCH, config.board_posts_page_size),
            admin_posts: TableSpec::new(ADMIN_POST_SEARCH, config.admin_posts_page_size),
            users: TableSpec::new(USER_SEARCH, config.users_page_size),
            admin_boards: TableSpec::new(ADMIN_BOARD_SEARCH, config.admin_boards_page_size),
            page_window: config.page_window,
        }
    }
}

impl Default for ViewSpecs {
    fn default() -> Self {
        Self::from_config(&ListingConfig::default())
    }
}
