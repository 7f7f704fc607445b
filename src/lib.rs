//! Libris: a personal catalog of books and the quotes worth keeping,
//! managed from the command line on top of SQLite.

pub mod cli;
pub mod core;
pub mod model;
