//! SQLite-backed book store
//!
//! The connection-scoped persistence collaborator. Exposes the primitive
//! row operations the library cache composes; every call is synchronous
//! and surfaces failures as `StoreError`. Quote rows are returned in id
//! order, which is the authoritative quote ordering.

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use thiserror::Error;

/// Errors raised at the store boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("no database at {}; run 'libris create-db' first", .0.display())]
    NoDatabase(PathBuf),

    #[error("no book with id {0} in the store")]
    UnknownBook(i64),

    #[error("book '{0}' is already persisted")]
    AlreadyPersisted(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// One row of the books table, without its quotes.
#[derive(Debug, Clone)]
pub struct BookRow {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
}

/// Result of a `check` probe against the store.
#[derive(Debug, Clone, Copy)]
pub struct StoreStatus {
    pub books_table: bool,
    pub quotes_table: bool,
    pub book_count: i64,
}

/// The SQLite store for books and quotes.
#[derive(Debug)]
pub struct BookStore {
    conn: Connection,
}

impl BookStore {
    /// Create the database file and its tables.
    ///
    /// Parent directories are created as needed. Fails if the schema
    /// cannot be written; an existing file is opened and re-schemed
    /// idempotently (`CREATE TABLE IF NOT EXISTS`).
    pub fn create(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;

        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Open an existing database.
    ///
    /// A missing file is `NoDatabase` rather than a silently created
    /// empty store.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Err(StoreError::NoDatabase(path.to_path_buf()));
        }

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS books (
                id     INTEGER PRIMARY KEY AUTOINCREMENT,
                title  TEXT NOT NULL,
                author TEXT NOT NULL,
                year   INTEGER NOT NULL,
                genre  TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS quotes (
                id      INTEGER PRIMARY KEY AUTOINCREMENT,
                book_id INTEGER NOT NULL REFERENCES books(id) ON DELETE CASCADE,
                quote   TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    /// Probe table existence and the stored book count.
    pub fn status(&self) -> Result<StoreStatus, StoreError> {
        let books_table = self.table_exists("books")?;
        let quotes_table = self.table_exists("quotes")?;
        let book_count = if books_table {
            self.conn
                .query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?
        } else {
            0
        };

        Ok(StoreStatus {
            books_table,
            quotes_table,
            book_count,
        })
    }

    fn table_exists(&self, name: &str) -> Result<bool, StoreError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            params![name],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Insert a book row and return the store-assigned id.
    pub fn create_book(
        &self,
        title: &str,
        author: &str,
        year: i32,
        genre: &str,
    ) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO books (title, author, year, genre) VALUES (?1, ?2, ?3, ?4)",
            params![title, author, year, genre],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert a quote row for an existing book.
    ///
    /// A foreign-key violation maps to `UnknownBook` so callers can
    /// tell "book is gone" apart from connectivity failures.
    pub fn create_quote(&self, book_id: i64, text: &str) -> Result<(), StoreError> {
        let result = self.conn.execute(
            "INSERT INTO quotes (book_id, quote) VALUES (?1, ?2)",
            params![book_id, text],
        );

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_constraint_violation(&e) => Err(StoreError::UnknownBook(book_id)),
            Err(e) => Err(e.into()),
        }
    }

    /// All book rows in store-assigned id order.
    pub fn list_books(&self) -> Result<Vec<BookRow>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, author, year, genre FROM books ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(BookRow {
                id: row.get(0)?,
                title: row.get(1)?,
                author: row.get(2)?,
                year: row.get(3)?,
                genre: row.get(4)?,
            })
        })?;

        let mut books = Vec::new();
        for row in rows {
            books.push(row?);
        }
        Ok(books)
    }

    /// A book's quote texts, in quote id order.
    pub fn list_quotes(&self, book_id: i64) -> Result<Vec<String>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT quote FROM quotes WHERE book_id = ?1 ORDER BY id")?;
        let rows = stmt.query_map(params![book_id], |row| row.get(0))?;

        let mut quotes = Vec::new();
        for row in rows {
            quotes.push(row?);
        }
        Ok(quotes)
    }

    /// A book's quote row ids, in the same order as `list_quotes`.
    pub fn list_quote_ids(&self, book_id: i64) -> Result<Vec<i64>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id FROM quotes WHERE book_id = ?1 ORDER BY id")?;
        let rows = stmt.query_map(params![book_id], |row| row.get(0))?;

        let mut ids = Vec::new();
        for row in rows {
            ids.push(row?);
        }
        Ok(ids)
    }

    /// Delete a book row; the store cascades to its quotes.
    /// Deleting an absent id affects zero rows and is not an error.
    pub fn delete_book(&self, id: i64) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM books WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// Delete a single quote row by its store id.
    pub fn delete_quote(&self, quote_id: i64) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM quotes WHERE id = ?1", params![quote_id])?;
        Ok(())
    }

    /// Overwrite a book row's fields, keyed by id.
    pub fn update_book(
        &self,
        id: i64,
        title: &str,
        author: &str,
        year: i32,
        genre: &str,
    ) -> Result<(), StoreError> {
        self.conn.execute(
            "UPDATE books SET title = ?1, author = ?2, year = ?3, genre = ?4 WHERE id = ?5",
            params![title, author, year, genre, id],
        )?;
        Ok(())
    }

    /// Delete every row from both tables, keeping the schema.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.conn.execute("DELETE FROM books", [])?;
        Ok(())
    }
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
