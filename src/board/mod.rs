//! Board and post records.
//!
//! Boards and posts are independent flat collections. A post refers to its
//! board by URL slug only; deleting a board leaves its posts in place.

mod post;
mod types;

pub use post::{NewPost, Post, PostField, PREVIEW_LENGTH};
pub use types::{board_name, Board, BoardField, BoardKind, NewBoard, GENERIC_BOARD_NAME};
