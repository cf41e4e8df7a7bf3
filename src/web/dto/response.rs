//! Response DTOs for Web API.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::board::{board_name, Board, Post};
use crate::table::{Page, PageControls};
use crate::user::User;

// ============================================================================
// Generic Response Wrappers
// ============================================================================

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T: Serialize> {
    /// Records on the requested page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub meta: PaginationMeta,
}

impl<T: Serialize> PaginatedResponse<T> {
    /// Build a response from a table page.
    pub fn from_page(page: Page<T>, window: usize) -> Self {
        let controls = page.controls(window);
        Self {
            meta: PaginationMeta::new(&page, controls),
            data: page.items,
        }
    }
}

/// Post list of one public board, with the board heading.
#[derive(Debug, Serialize)]
pub struct BoardPostsResponse {
    /// Board URL slug.
    pub board_url: String,
    /// Heading to show above the list.
    pub board_name: String,
    /// Posts and pagination metadata.
    #[serde(flatten)]
    pub posts: PaginatedResponse<PostListResponse>,
}

impl BoardPostsResponse {
    /// Wrap a post page of the board at `board_url`.
    pub fn new(board_url: &str, posts: PaginatedResponse<PostListResponse>) -> Self {
        Self {
            board_url: board_url.to_string(),
            board_name: board_name(board_url).to_string(),
            posts,
        }
    }
}

/// Pagination metadata.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    /// Current page number.
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Number of records matching the search.
    pub total: usize,
    /// Number of pages.
    pub total_pages: usize,
    /// Page numbers to show as links.
    pub pages: Vec<usize>,
    /// Whether a previous page exists.
    pub has_prev: bool,
    /// Whether a next page exists.
    pub has_next: bool,
    /// True when no record matched, so the controls are inert.
    pub disabled: bool,
}

impl PaginationMeta {
    fn new<T>(page: &Page<T>, controls: PageControls) -> Self {
        Self {
            page: page.page,
            per_page: page.page_size,
            total: page.total_count,
            total_pages: page.total_pages,
            pages: controls.pages,
            has_prev: controls.has_prev,
            has_next: controls.has_next,
            disabled: controls.disabled,
        }
    }
}

// ============================================================================
// Board DTOs
// ============================================================================

/// Board response.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// Board ID.
    pub id: i64,
    /// Board title.
    pub title: String,
    /// URL slug.
    pub url: String,
    /// Board kind.
    pub kind: String,
    /// Board kind label.
    pub kind_name: String,
    /// Creator name.
    pub author: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// View count.
    pub views: i64,
    /// Comment count.
    pub comments: i64,
}

impl From<&Board> for BoardResponse {
    fn from(b: &Board) -> Self {
        Self {
            id: b.id,
            title: b.title.clone(),
            url: b.url.clone(),
            kind: b.kind.as_str().to_string(),
            kind_name: b.kind.display_name().to_string(),
            author: b.author.clone(),
            created_at: b.created_at,
            views: b.views,
            comments: b.comments,
        }
    }
}

// ============================================================================
// Post DTOs
// ============================================================================

/// Post row in a list.
#[derive(Debug, Serialize)]
pub struct PostListResponse {
    /// Post ID.
    pub id: i64,
    /// Board URL slug.
    pub board_url: String,
    /// Post title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Content excerpt.
    pub preview: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// View count.
    pub views: i64,
    /// Comment count.
    pub comments: i64,
    /// Like count.
    pub likes: i64,
    /// Whether the viewer liked the post.
    pub is_liked: bool,
}

impl From<&Post> for PostListResponse {
    fn from(p: &Post) -> Self {
        Self {
            id: p.id,
            board_url: p.board_url.clone(),
            title: p.title.clone(),
            author: p.author.clone(),
            preview: p.preview(),
            created_at: p.created_at,
            views: p.views,
            comments: p.comments,
            likes: p.likes,
            is_liked: p.is_liked,
        }
    }
}

/// Full post.
#[derive(Debug, Serialize)]
pub struct PostResponse {
    /// Post ID.
    pub id: i64,
    /// Board URL slug.
    pub board_url: String,
    /// Post title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Post body.
    pub content: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// View count.
    pub views: i64,
    /// Comment count.
    pub comments: i64,
    /// Like count.
    pub likes: i64,
    /// Whether the viewer liked the post.
    pub is_liked: bool,
}

impl From<&Post> for PostResponse {
    fn from(p: &Post) -> Self {
        Self {
            id: p.id,
            board_url: p.board_url.clone(),
            title: p.title.clone(),
            author: p.author.clone(),
            content: p.content.clone(),
            created_at: p.created_at,
            views: p.views,
            comments: p.comments,
            likes: p.likes,
            is_liked: p.is_liked,
        }
    }
}

/// Like toggle result.
#[derive(Debug, Serialize)]
pub struct LikeResponse {
    /// Post ID.
    pub id: i64,
    /// Like count after the toggle.
    pub likes: i64,
    /// Like flag after the toggle.
    pub is_liked: bool,
}

// ============================================================================
// User DTOs
// ============================================================================

/// User response.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// User ID.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Registration timestamp.
    pub joined_at: DateTime<Utc>,
    /// Last login timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,
    /// Account status.
    pub status: String,
}

impl From<&User> for UserResponse {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            name: u.name.clone(),
            email: u.email.clone(),
            phone: u.phone.clone(),
            joined_at: u.joined_at,
            last_login_at: u.last_login_at,
            status: u.status.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_response_meta() {
        let page = Page {
            items: vec![1, 2],
            page: 3,
            page_size: 2,
            total_count: 10,
            total_pages: 5,
        };
        let response = PaginatedResponse::from_page(page, 5);
        assert_eq!(response.data, vec![1, 2]);
        assert_eq!(response.meta.page, 3);
        assert_eq!(response.meta.per_page, 2);
        assert_eq!(response.meta.total, 10);
        assert_eq!(response.meta.pages, vec![1, 2, 3, 4, 5]);
        assert!(response.meta.has_prev);
        assert!(response.meta.has_next);
    }

    #[test]
    fn test_paginated_response_empty() {
        let page: Page<i32> = Page {
            items: vec![],
            page: 1,
            page_size: 20,
            total_count: 0,
            total_pages: 0,
        };
        let json = serde_json::to_value(PaginatedResponse::from_page(page, 5)).unwrap();
        assert_eq!(json["meta"]["total"], 0);
        assert_eq!(json["meta"]["pages"], serde_json::json!([1]));
        assert_eq!(json["meta"]["has_next"], false);
        assert_eq!(json["meta"]["disabled"], true);
    }

    #[test]
    fn test_board_posts_response_flattens_page() {
        let page: Page<PostListResponse> = Page {
            items: vec![],
            page: 1,
            page_size: 20,
            total_count: 0,
            total_pages: 0,
        };
        let response = BoardPostsResponse::new("custom", PaginatedResponse::from_page(page, 5));
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["board_url"], "custom");
        assert_eq!(json["board_name"], "Board");
        assert_eq!(json["data"], serde_json::json!([]));
        assert_eq!(json["meta"]["total"], 0);
    }
}
