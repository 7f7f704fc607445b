//! The library cache - in-memory mirror of the book store
//!
//! `Library` owns the store handle plus the authoritative in-memory
//! mirror of its contents. Reads serve from the mirror; every mutation
//! writes through to the store first and only then touches the mirror,
//! so a failed durable write never leaves the mirror ahead of the
//! store. Nothing in this layer prints; every operation returns a
//! structured result for the command layer to render.

use crate::core::store::{BookStore, StoreError};
use crate::model::Book;

/// The in-memory mirror plus its backing store.
pub struct Library {
    store: BookStore,
    books: Vec<Book>,
}

impl Library {
    /// Wrap a store with an empty mirror. Call `reload` to populate it.
    pub fn new(store: BookStore) -> Self {
        Self {
            store,
            books: Vec::new(),
        }
    }

    /// The current mirror, in store-assigned id order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Look up a mirror entry by store id.
    pub fn get(&self, id: i64) -> Option<&Book> {
        self.books.iter().find(|b| b.id == Some(id))
    }

    /// Rebuild the mirror from the store.
    ///
    /// Books arrive in store id order, each with its quotes in quote id
    /// order. On failure the mirror is left empty and the error is
    /// returned; callers that keep going afterwards get the documented
    /// degrade-to-empty behavior.
    pub fn reload(&mut self) -> Result<usize, StoreError> {
        self.books.clear();

        for row in self.store.list_books()? {
            let quotes = self.store.list_quotes(row.id)?;
            self.books.push(Book {
                id: Some(row.id),
                title: row.title,
                author: row.author,
                year: row.year,
                genre: row.genre,
                quotes,
            });
        }

        Ok(self.books.len())
    }

    /// Persist a new book and its quotes, then append it to the mirror.
    ///
    /// The book must not carry an id yet. The book row is written
    /// first; if any quote row then fails, the book row is deleted
    /// again so the store never keeps a book with half its quotes.
    /// Returns the store-assigned id.
    pub fn insert(&mut self, mut book: Book) -> Result<i64, StoreError> {
        if book.id.is_some() {
            return Err(StoreError::AlreadyPersisted(book.title));
        }

        let id = self
            .store
            .create_book(&book.title, &book.author, book.year, &book.genre)?;

        for quote in &book.quotes {
            if let Err(e) = self.store.create_quote(id, quote) {
                // Compensating delete: take the book row back out rather
                // than leaving it persisted without its quotes.
                let _ = self.store.delete_book(id);
                return Err(e);
            }
        }

        book.id = Some(id);
        self.books.push(book);
        Ok(id)
    }

    /// Delete a book; the store cascades to its quotes.
    ///
    /// Removing an id the store does not hold is a non-error no-op, in
    /// the store and in the mirror alike.
    pub fn remove(&mut self, id: i64) -> Result<(), StoreError> {
        self.store.delete_book(id)?;
        self.books.retain(|b| b.id != Some(id));
        Ok(())
    }

    /// Persist a new quote for a book, then append it to the mirror
    /// entry's quote sequence.
    pub fn append_quote(&mut self, id: i64, text: &str) -> Result<(), StoreError> {
        self.store.create_quote(id, text)?;

        if let Some(book) = self.books.iter_mut().find(|b| b.id == Some(id)) {
            book.quotes.push(text.to_string());
        }
        Ok(())
    }

    /// Delete the quote at a 0-based position within a book's sequence.
    ///
    /// The position is resolved against the store's current quote rows,
    /// not the mirror: the row ids are re-queried in order and the
    /// index validated against that count. Returns `Ok(false)` without
    /// mutating anything when the index is out of range. On success the
    /// mirror entry is updated too, after re-checking the index against
    /// the mirror's own length in case the two have drifted.
    pub fn remove_quote_at(&mut self, id: i64, index: usize) -> Result<bool, StoreError> {
        let quote_ids = self.store.list_quote_ids(id)?;
        let Some(&quote_id) = quote_ids.get(index) else {
            return Ok(false);
        };

        self.store.delete_quote(quote_id)?;

        if let Some(book) = self.books.iter_mut().find(|b| b.id == Some(id)) {
            if index < book.quotes.len() {
                book.quotes.remove(index);
            }
        }
        Ok(true)
    }

    /// Persist new field values keyed by id, then replace the mirror
    /// entry with the updated book. The quote sequence travels with
    /// `updated` unchanged.
    pub fn update(&mut self, id: i64, mut updated: Book) -> Result<(), StoreError> {
        self.store.update_book(
            id,
            &updated.title,
            &updated.author,
            updated.year,
            &updated.genre,
        )?;

        updated.id = Some(id);
        if let Some(book) = self.books.iter_mut().find(|b| b.id == Some(id)) {
            *book = updated;
        }
        Ok(())
    }

    /// Delete every book and quote from store and mirror, keeping the
    /// schema.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.store.clear()?;
        self.books.clear();
        Ok(())
    }
}
