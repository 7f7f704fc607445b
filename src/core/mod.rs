//! Core module - storage, mirror, and query engine

pub mod config;
pub mod filter;
pub mod library;
pub mod store;

pub use filter::{search, sort_books, SearchCriteria, SortField};
pub use library::Library;
pub use store::{BookRow, BookStore, StoreError, StoreStatus};
