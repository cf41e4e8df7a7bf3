//! JSON seed documents.
//!
//! A seed lists boards, posts and users in display order (newest first).
//! Any of the three arrays may be omitted.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Post};
use crate::user::User;
use crate::{BoardviewError, Result};

/// Initial contents of a catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    /// Boards.
    #[serde(default)]
    pub boards: Vec<Board>,
    /// Posts of all boards.
    #[serde(default)]
    pub posts: Vec<Post>,
    /// Users.
    #[serde(default)]
    pub users: Vec<User>,
}

impl Seed {
    /// Read a seed from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse a seed from a JSON string and check identifiers.
    pub fn parse(s: &str) -> Result<Self> {
        let seed: Seed = serde_json::from_str(s)?;
        seed.check()?;
        Ok(seed)
    }

    /// Reject duplicate IDs within a collection and duplicate board URLs.
    pub fn check(&self) -> Result<()> {
        ensure_unique("board id", self.boards.iter().map(|b| b.id))?;
        ensure_unique("post id", self.posts.iter().map(|p| p.id))?;
        ensure_unique("user id", self.users.iter().map(|u| u.id))?;

        let mut urls = HashSet::new();
        for board in &self.boards {
            if !urls.insert(board.url.as_str()) {
                return Err(BoardviewError::Seed(format!(
                    "duplicate board url '{}'",
                    board.url
                )));
            }
        }
        Ok(())
    }
}

fn ensure_unique(what: &str, ids: impl Iterator<Item = i64>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(BoardviewError::Seed(format!("duplicate {what} {id}")));
        }
    }
    Ok(())
}
