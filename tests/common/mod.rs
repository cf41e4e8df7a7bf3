//! Shared fixtures for the Web API tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use chrono::{DateTime, Duration, TimeZone, Utc};

use boardview::board::{Board, BoardKind, Post};
use boardview::catalog::{Catalog, Seed};
use boardview::config::ListingConfig;
use boardview::user::{User, UserStatus};
use boardview::web::{create_app, AppState};

/// Number of posts on the `free` board.
pub const FREE_POSTS: i64 = 100;

/// Number of users in the fixture.
pub const USERS: i64 = 45;

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Boards `notice` (id 2) and `free` (id 1), newest first.
pub fn boards() -> Vec<Board> {
    vec![
        Board {
            id: 2,
            title: "Notices".to_string(),
            url: "notice".to_string(),
            kind: BoardKind::Notice,
            author: "admin".to_string(),
            created_at: base_time() + Duration::days(1),
            views: 10,
            comments: 0,
        },
        Board {
            id: 1,
            title: "Free board".to_string(),
            url: "free".to_string(),
            kind: BoardKind::General,
            author: "admin".to_string(),
            created_at: base_time(),
            views: 250,
            comments: 12,
        },
    ]
}

/// Posts 1..=100 on `free`, newest (highest id) first.
///
/// Titles are "Post N"; every tenth post is written by "Kim".
pub fn posts() -> Vec<Post> {
    (1..=FREE_POSTS)
        .rev()
        .map(|id| Post {
            id,
            board_url: "free".to_string(),
            title: format!("Post {id}"),
            author: if id % 10 == 0 {
                "Kim".to_string()
            } else {
                format!("Writer {}", id % 7)
            },
            content: format!("Body of post {id}"),
            created_at: base_time() + Duration::minutes(id),
            views: id * 3,
            comments: id % 5,
            likes: id % 4,
            is_liked: false,
        })
        .collect()
}

/// Users 1..=45, newest first. Every third user is pending.
pub fn users() -> Vec<User> {
    (1..=USERS)
        .rev()
        .map(|id| User {
            id,
            name: format!("User{id}"),
            email: format!("user{id}@example.com"),
            phone: format!("010-0000-{id:04}"),
            joined_at: base_time() + Duration::days(id),
            last_login_at: None,
            status: if id % 3 == 0 {
                UserStatus::Pending
            } else {
                UserStatus::Active
            },
        })
        .collect()
}

/// Catalog over the fixture data with default page sizes.
pub fn create_test_catalog() -> Catalog {
    let seed = Seed {
        boards: boards(),
        posts: posts(),
        users: users(),
    };
    Catalog::from_seed(&ListingConfig::default(), seed).expect("Fixture seed is valid")
}

/// Create a test server over the fixture catalog.
pub fn create_test_server() -> TestServer {
    let app_state = Arc::new(AppState::new(create_test_catalog()));
    let router = create_app(app_state, &[]);
    TestServer::new(router).expect("Failed to create test server")
}
