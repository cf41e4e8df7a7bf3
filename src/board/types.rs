//! Board model for boardview.
//!
//! This module defines the Board struct, the BoardKind tag and the
//! BoardField columns used by the board-management listing.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::table::{FieldValue, Record};

/// Kind of board, shown as a colored tag in the management list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardKind {
    /// General discussion.
    #[default]
    General,
    /// Announcements.
    Notice,
    /// Image gallery.
    Gallery,
    /// Short social posts.
    Sns,
    /// Questions and answers.
    Qna,
    /// File archive.
    Archive,
}

impl BoardKind {
    /// All kinds in declaration order.
    pub const ALL: [BoardKind; 6] = [
        BoardKind::General,
        BoardKind::Notice,
        BoardKind::Gallery,
        BoardKind::Sns,
        BoardKind::Qna,
        BoardKind::Archive,
    ];

    /// Convert board kind to its string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardKind::General => "general",
            BoardKind::Notice => "notice",
            BoardKind::Gallery => "gallery",
            BoardKind::Sns => "sns",
            BoardKind::Qna => "qna",
            BoardKind::Archive => "archive",
        }
    }

    /// Get display name for the board kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            BoardKind::General => "General",
            BoardKind::Notice => "Notice",
            BoardKind::Gallery => "Gallery",
            BoardKind::Sns => "SNS",
            BoardKind::Qna => "Q&A",
            BoardKind::Archive => "Archive",
        }
    }

    /// Kind served under a well-known public URL slug.
    pub fn from_slug(url: &str) -> Option<Self> {
        match url {
            "free" => Some(BoardKind::General),
            "notice" => Some(BoardKind::Notice),
            "gallery" => Some(BoardKind::Gallery),
            "sns" => Some(BoardKind::Sns),
            "qna" => Some(BoardKind::Qna),
            "data" => Some(BoardKind::Archive),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        *self as u8
    }
}

/// Generic heading for boards outside the well-known slugs.
pub const GENERIC_BOARD_NAME: &str = "Board";

/// Heading shown above a public board's post list.
///
/// Well-known slugs get the name of their kind (`free` is the free board);
/// anything else gets [`GENERIC_BOARD_NAME`].
pub fn board_name(url: &str) -> &'static str {
    match BoardKind::from_slug(url) {
        Some(BoardKind::General) => "Free Board",
        Some(kind) => kind.display_name(),
        None => GENERIC_BOARD_NAME,
    }
}

impl fmt::Display for BoardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BoardKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "general" => Ok(BoardKind::General),
            "notice" => Ok(BoardKind::Notice),
            "gallery" => Ok(BoardKind::Gallery),
            "sns" => Ok(BoardKind::Sns),
            "qna" | "q&a" => Ok(BoardKind::Qna),
            "archive" => Ok(BoardKind::Archive),
            _ => Err(format!("unknown board kind: {s}")),
        }
    }
}

/// Board entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Unique board ID.
    pub id: i64,
    /// Board title.
    pub title: String,
    /// URL slug (unique).
    pub url: String,
    /// Board kind.
    #[serde(default)]
    pub kind: BoardKind,
    /// Name of the creator.
    pub author: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// View count.
    #[serde(default)]
    pub views: i64,
    /// Comment count.
    #[serde(default)]
    pub comments: i64,
}

/// Columns of a board row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardField {
    /// Board ID.
    Id,
    /// Board title.
    Title,
    /// URL slug.
    Url,
    /// Board kind, sorted in declaration order.
    Kind,
    /// Creator name.
    Author,
    /// Creation time.
    CreatedAt,
    /// View count.
    Views,
    /// Comment count.
    Comments,
}

impl BoardField {
    /// Column name used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardField::Id => "id",
            BoardField::Title => "title",
            BoardField::Url => "url",
            BoardField::Kind => "kind",
            BoardField::Author => "author",
            BoardField::CreatedAt => "created_at",
            BoardField::Views => "views",
            BoardField::Comments => "comments",
        }
    }
}

impl FromStr for BoardField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(BoardField::Id),
            "title" => Ok(BoardField::Title),
            "url" => Ok(BoardField::Url),
            "kind" => Ok(BoardField::Kind),
            "author" => Ok(BoardField::Author),
            "created_at" => Ok(BoardField::CreatedAt),
            "views" => Ok(BoardField::Views),
            "comments" => Ok(BoardField::Comments),
            _ => Err(format!("unknown board field: {s}")),
        }
    }
}

impl Record for Board {
    type Field = BoardField;

    fn id(&self) -> i64 {
        self.id
    }

    fn field(&self, field: BoardField) -> FieldValue<'_> {
        match field {
            BoardField::Id => FieldValue::Number(self.id),
            BoardField::Title => FieldValue::Text(&self.title),
            BoardField::Url => FieldValue::Text(&self.url),
            BoardField::Kind => FieldValue::Label {
                rank: self.kind.rank(),
                name: self.kind.display_name(),
            },
            BoardField::Author => FieldValue::Text(&self.author),
            BoardField::CreatedAt => FieldValue::Time(self.created_at),
            BoardField::Views => FieldValue::Number(self.views),
            BoardField::Comments => FieldValue::Number(self.comments),
        }
    }
}

/// Data for creating a new board.
#[derive(Debug, Clone)]
pub struct NewBoard {
    /// Board title.
    pub title: String,
    /// URL slug.
    pub url: String,
    /// Board kind (defaults to General).
    pub kind: BoardKind,
    /// Creator name.
    pub author: String,
}

impl NewBoard {
    /// Create a new board with minimal required fields.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            kind: BoardKind::General,
            author: "admin".to_string(),
        }
    }

    /// Set the board kind.
    pub fn with_kind(mut self, kind: BoardKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_board() -> Board {
        Board {
            id: 7,
            title: "Board 7".to_string(),
            url: "board-7".to_string(),
            kind: BoardKind::Qna,
            author: "Writer 7".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
            views: 120,
            comments: 4,
        }
    }

    #[test]
    fn test_board_kind_as_str() {
        assert_eq!(BoardKind::General.as_str(), "general");
        assert_eq!(BoardKind::Qna.as_str(), "qna");
        assert_eq!(BoardKind::Archive.as_str(), "archive");
    }

    #[test]
    fn test_board_kind_display_name() {
        assert_eq!(BoardKind::Sns.display_name(), "SNS");
        assert_eq!(BoardKind::Qna.display_name(), "Q&A");
    }

    #[test]
    fn test_board_kind_from_str() {
        assert_eq!(BoardKind::from_str("notice").unwrap(), BoardKind::Notice);
        assert_eq!(BoardKind::from_str("GALLERY").unwrap(), BoardKind::Gallery);
        assert_eq!(BoardKind::from_str("Q&A").unwrap(), BoardKind::Qna);
        assert!(BoardKind::from_str("forum").is_err());
    }

    #[test]
    fn test_board_kind_rank_follows_declaration() {
        let ranks: Vec<u8> = BoardKind::ALL.iter().map(|k| k.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_board_kind_default() {
        assert_eq!(BoardKind::default(), BoardKind::General);
    }

    #[test]
    fn test_board_field_from_str() {
        assert_eq!(BoardField::from_str("created_at").unwrap(), BoardField::CreatedAt);
        assert_eq!(BoardField::Views.as_str(), "views");
        assert!(BoardField::from_str("createdAt").is_err());
    }

    #[test]
    fn test_board_record_fields() {
        let board = sample_board();
        assert_eq!(board.field(BoardField::Id), FieldValue::Number(7));
        assert_eq!(board.field(BoardField::Title), FieldValue::Text("Board 7"));
        assert_eq!(
            board.field(BoardField::Kind),
            FieldValue::Label {
                rank: 4,
                name: "Q&A"
            }
        );
        assert_eq!(Record::id(&board), 7);
    }

    #[test]
    fn test_board_serde() {
        let board = sample_board();
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json["kind"], "qna");

        let back: Board = serde_json::from_value(json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_board_kind_from_slug() {
        assert_eq!(BoardKind::from_slug("free"), Some(BoardKind::General));
        assert_eq!(BoardKind::from_slug("data"), Some(BoardKind::Archive));
        assert_eq!(BoardKind::from_slug("qna"), Some(BoardKind::Qna));
        assert_eq!(BoardKind::from_slug("archive"), None);
        assert_eq!(BoardKind::from_slug("FREE"), None);
    }

    #[test]
    fn test_board_name() {
        assert_eq!(board_name("free"), "Free Board");
        assert_eq!(board_name("notice"), "Notice");
        assert_eq!(board_name("gallery"), "Gallery");
        assert_eq!(board_name("sns"), "SNS");
        assert_eq!(board_name("qna"), "Q&A");
        assert_eq!(board_name("data"), "Archive");
        assert_eq!(board_name("my-board_2"), GENERIC_BOARD_NAME);
        assert_eq!(board_name(""), GENERIC_BOARD_NAME);
    }

    #[test]
    fn test_new_board_builder() {
        let new_board = NewBoard::new("Photos", "photos")
            .with_kind(BoardKind::Gallery)
            .with_author("Writer 1");
        assert_eq!(new_board.title, "Photos");
        assert_eq!(new_board.url, "photos");
        assert_eq!(new_board.kind, BoardKind::Gallery);
        assert_eq!(new_board.author, "Writer 1");
    }
}
