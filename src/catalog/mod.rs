//! In-memory catalog of boards, posts and users.
//!
//! The catalog owns the three collections in display order (newest first)
//! and implements every listing and mutation the dashboard offers. Listings
//! are pure projections; mutations change only the in-memory collections.

mod seed;
mod views;

pub use seed::Seed;
pub use views::{ViewSpecs, ADMIN_BOARD_SEARCH, ADMIN_POST_SEARCH, BOARD_POST_SEARCH, USER_SEARCH};

use chrono::Utc;
use tracing::{info, warn};

use crate::board::{Board, BoardField, NewBoard, NewPost, Post, PostField};
use crate::config::ListingConfig;
use crate::table::{project, Page, TableQuery};
use crate::user::{User, UserField, UserUpdate};
use crate::validation::{
    validate_board_url, validate_content, validate_email, validate_name, validate_title,
};
use crate::{BoardviewError, Result};

/// Boards, posts and users held in memory.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    boards: Vec<Board>,
    posts: Vec<Post>,
    users: Vec<User>,
    views: ViewSpecs,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new(listing: &ListingConfig) -> Self {
        Self {
            views: ViewSpecs::from_config(listing),
            ..Default::default()
        }
    }

    /// Create a catalog from seed data.
    ///
    /// The seed is checked again here, since its fields can be filled in
    /// by hand without going through [`Seed::parse`].
    pub fn from_seed(listing: &ListingConfig, seed: Seed) -> Result<Self> {
        seed.check()?;
        info!(
            boards = seed.boards.len(),
            posts = seed.posts.len(),
            users = seed.users.len(),
            "Catalog loaded from seed"
        );
        Ok(Self {
            boards: seed.boards,
            posts: seed.posts,
            users: seed.users,
            views: ViewSpecs::from_config(listing),
        })
    }

    /// View definitions in use.
    pub fn views(&self) -> &ViewSpecs {
        &self.views
    }

    // ------------------------------------------------------------------
    // Listings
    // ------------------------------------------------------------------

    /// Posts of one public board.
    pub fn list_board_posts(
        &self,
        board_url: &str,
        query: &TableQuery<PostField>,
    ) -> Result<Page<&Post>> {
        self.board_by_url(board_url)?;
        let posts = self.posts.iter().filter(|p| p.board_url == board_url);
        Ok(project(posts, &self.views.board_posts, query))
    }

    /// Posts of all boards, for the admin post list.
    pub fn list_admin_posts(&self, query: &TableQuery<PostField>) -> Page<&Post> {
        project(&self.posts, &self.views.admin_posts, query)
    }

    /// Users, for the admin user list.
    pub fn list_users(&self, query: &TableQuery<UserField>) -> Page<&User> {
        project(&self.users, &self.views.users, query)
    }

    /// Boards, for the admin board list.
    pub fn list_admin_boards(&self, query: &TableQuery<BoardField>) -> Page<&Board> {
        project(&self.boards, &self.views.admin_boards, query)
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    /// Get a board by URL slug.
    pub fn board_by_url(&self, url: &str) -> Result<&Board> {
        self.boards
            .iter()
            .find(|b| b.url == url)
            .ok_or_else(|| BoardviewError::NotFound(format!("board '{url}'")))
    }

    /// Get a board by ID.
    pub fn board(&self, id: i64) -> Result<&Board> {
        self.boards
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| BoardviewError::NotFound(format!("board {id}")))
    }

    /// Get a post by ID.
    pub fn post(&self, id: i64) -> Result<&Post> {
        self.posts
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| BoardviewError::NotFound(format!("post {id}")))
    }

    /// Get a user by ID.
    pub fn user(&self, id: i64) -> Result<&User> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| BoardviewError::NotFound(format!("user {id}")))
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Create a board. The new board is listed first.
    pub fn create_board(&mut self, new_board: NewBoard) -> Result<Board> {
        if let Err(e) = validate_board_url(&new_board.url) {
            warn!(url = %new_board.url, "Rejected board url: {}", e);
            return Err(e.into());
        }
        validate_title(&new_board.title)?;
        validate_name(&new_board.author)?;

        if self.boards.iter().any(|b| b.url == new_board.url) {
            return Err(BoardviewError::Conflict(format!(
                "board url '{}' is already in use",
                new_board.url
            )));
        }

        let board = Board {
            id: next_id("board", self.boards.iter().map(|b| b.id))?,
            title: new_board.title,
            url: new_board.url,
            kind: new_board.kind,
            author: new_board.author,
            created_at: Utc::now(),
            views: 0,
            comments: 0,
        };
        self.boards.insert(0, board.clone());

        info!(board_id = board.id, url = %board.url, "Board created");
        Ok(board)
    }

    /// Delete a board. Its posts are kept.
    pub fn delete_board(&mut self, id: i64) -> Result<Board> {
        let index = self
            .boards
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| BoardviewError::NotFound(format!("board {id}")))?;
        let board = self.boards.remove(index);

        info!(board_id = id, url = %board.url, "Board deleted");
        Ok(board)
    }

    /// Write a post on a board. The new post is listed first.
    pub fn create_post(&mut self, board_url: &str, new_post: NewPost) -> Result<Post> {
        self.board_by_url(board_url)?;
        validate_title(&new_post.title)?;
        validate_content(&new_post.content)?;
        validate_name(&new_post.author)?;

        let post = Post {
            id: next_id("post", self.posts.iter().map(|p| p.id))?,
            board_url: board_url.to_string(),
            title: new_post.title,
            author: new_post.author,
            content: new_post.content,
            created_at: Utc::now(),
            views: 0,
            comments: 0,
            likes: 0,
            is_liked: false,
        };
        self.posts.insert(0, post.clone());

        info!(post_id = post.id, board_url, "Post created");
        Ok(post)
    }

    /// Toggle the like flag of a post.
    pub fn toggle_like(&mut self, post_id: i64) -> Result<&Post> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| BoardviewError::NotFound(format!("post {post_id}")))?;
        post.toggle_like();
        Ok(post)
    }

    /// Apply a partial update to a user.
    pub fn update_user(&mut self, id: i64, update: &UserUpdate) -> Result<&User> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        if let Some(email) = &update.email {
            validate_email(email)?;
        }

        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| BoardviewError::NotFound(format!("user {id}")))?;
        update.apply_to(user);

        info!(user_id = id, "User updated");
        Ok(user)
    }
}

/// One past the largest existing ID.
fn next_id(what: &str, ids: impl Iterator<Item = i64>) -> Result<i64> {
    ids.max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| BoardviewError::Conflict(format!("no {what} id left to assign")))
}
