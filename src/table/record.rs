//! Record abstraction used by the table projection.
//!
//! A record exposes its columns through a typed field enum. Each field
//! yields a [`FieldValue`], which knows how to render itself for search
//! matching and how to compare against another value of the same column.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Format used when a timestamp is matched against a search term.
const TIME_SEARCH_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A row that can be listed in a table view.
pub trait Record {
    /// Column identifier for this record type.
    type Field: Copy + Eq + fmt::Debug;

    /// Unique identifier of the record.
    fn id(&self) -> i64;

    /// Value of a single column.
    fn field(&self, field: Self::Field) -> FieldValue<'_>;
}

/// A primitive column value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Free text.
    Text(&'a str),
    /// Integer value.
    Number(i64),
    /// Boolean flag.
    Flag(bool),
    /// Point in time.
    Time(DateTime<Utc>),
    /// Fixed-choice tag. `rank` is the declaration order used for sorting.
    Label { rank: u8, name: &'static str },
}

impl FieldValue<'_> {
    /// String form used for substring search.
    pub fn search_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(s),
            FieldValue::Number(n) => Cow::Owned(n.to_string()),
            FieldValue::Flag(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            FieldValue::Time(t) => Cow::Owned(t.format(TIME_SEARCH_FORMAT).to_string()),
            FieldValue::Label { name, .. } => Cow::Borrowed(name),
        }
    }

    /// Whether the lowercased `needle` occurs in this value, ignoring case.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.search_text().to_lowercase().contains(needle)
    }

    /// Compare two values of the same column.
    ///
    /// Values of different kinds never share a column in practice; they are
    /// ordered by kind so the comparison stays total.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Number(a), FieldValue::Number(b)) => a.cmp(b),
            (FieldValue::Flag(a), FieldValue::Flag(b)) => a.cmp(b),
            (FieldValue::Time(a), FieldValue::Time(b)) => a.cmp(b),
            (FieldValue::Label { rank: a, .. }, FieldValue::Label { rank: b, .. }) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Text(_) => 0,
            FieldValue::Number(_) => 1,
            FieldValue::Flag(_) => 2,
            FieldValue::Time(_) => 3,
            FieldValue::Label { .. } => 4,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// Query-string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Apply this direction to an ascending ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!("unknown sort direction: {s}")),
        }
    }
}
