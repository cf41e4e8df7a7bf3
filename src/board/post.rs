//! Post model for boardview.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::table::{FieldValue, Record};

/// Number of characters kept in a post preview.
pub const PREVIEW_LENGTH: usize = 60;

/// Post entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post ID.
    pub id: i64,
    /// URL slug of the board this post belongs to.
    pub board_url: String,
    /// Post title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Post body.
    #[serde(default)]
    pub content: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// View count.
    #[serde(default)]
    pub views: i64,
    /// Comment count.
    #[serde(default)]
    pub comments: i64,
    /// Like count.
    #[serde(default)]
    pub likes: i64,
    /// Whether the current viewer liked this post.
    #[serde(default)]
    pub is_liked: bool,
}

impl Post {
    /// Short excerpt of the content for list rows.
    pub fn preview(&self) -> String {
        let mut chars = self.content.chars();
        let head: String = chars.by_ref().take(PREVIEW_LENGTH).collect();
        if chars.next().is_some() {
            format!("{head}...")
        } else {
            head
        }
    }

    /// Flip the like flag, adjusting the like count.
    pub fn toggle_like(&mut self) {
        if self.is_liked {
            self.likes = (self.likes - 1).max(0);
        } else {
            self.likes += 1;
        }
        self.is_liked = !self.is_liked;
    }
}

/// Columns of a post row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostField {
    /// Post ID.
    Id,
    /// Slug of the board the post belongs to.
    BoardUrl,
    /// Post title.
    Title,
    /// Author name.
    Author,
    /// Creation time.
    CreatedAt,
    /// View count.
    Views,
    /// Comment count.
    Comments,
    /// Like count.
    Likes,
    /// Whether the viewer liked the post.
    IsLiked,
}

impl PostField {
    /// Column name used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            PostField::Id => "id",
            PostField::BoardUrl => "board_url",
            PostField::Title => "title",
            PostField::Author => "author",
            PostField::CreatedAt => "created_at",
            PostField::Views => "views",
            PostField::Comments => "comments",
            PostField::Likes => "likes",
            PostField::IsLiked => "is_liked",
        }
    }
}

impl FromStr for PostField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(PostField::Id),
            "board_url" => Ok(PostField::BoardUrl),
            "title" => Ok(PostField::Title),
            "author" => Ok(PostField::Author),
            "created_at" => Ok(PostField::CreatedAt),
            "views" => Ok(PostField::Views),
            "comments" => Ok(PostField::Comments),
            "likes" => Ok(PostField::Likes),
            "is_liked" => Ok(PostField::IsLiked),
            _ => Err(format!("unknown post field: {s}")),
        }
    }
}

impl Record for Post {
    type Field = PostField;

    fn id(&self) -> i64 {
        self.id
    }

    fn field(&self, field: PostField) -> FieldValue<'_> {
        match field {
            PostField::Id => FieldValue::Number(self.id),
            PostField::BoardUrl => FieldValue::Text(&self.board_url),
            PostField::Title => FieldValue::Text(&self.title),
            PostField::Author => FieldValue::Text(&self.author),
            PostField::CreatedAt => FieldValue::Time(self.created_at),
            PostField::Views => FieldValue::Number(self.views),
            PostField::Comments => FieldValue::Number(self.comments),
            PostField::Likes => FieldValue::Number(self.likes),
            PostField::IsLiked => FieldValue::Flag(self.is_liked),
        }
    }
}

/// Data for writing a new post.
#[derive(Debug, Clone)]
pub struct NewPost {
    /// Post title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Post body.
    pub content: String,
}

impl NewPost {
    /// Create a new post.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            content: content.into(),
        }
    }
}
