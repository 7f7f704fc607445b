//! The Book entity
//!
//! A book carries its quotes as an ordered sequence; quotes have no
//! identity of their own and are addressed by position.

use std::fmt;

use serde::Serialize;

/// A cataloged book with its attached quotes.
///
/// `id` is assigned by the store on insert and is `None` until then.
/// A book without an id has not been persisted and must not reach any
/// operation keyed on identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub quotes: Vec<String>,
}

impl Book {
    /// Create a not-yet-persisted book with no quotes.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            quotes: Vec::new(),
        }
    }

    pub fn quote_count(&self) -> usize {
        self.quotes.len()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' - {} ({})", self.title, self.author, self.year)
    }
}
