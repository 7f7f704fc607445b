//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    add::AddArgs,
    add_quote::AddQuoteArgs,
    clear_db::ClearDbArgs,
    completions::CompletionsArgs,
    edit::EditArgs,
    export::ExportArgs,
    list::ListArgs,
    remove::RemoveArgs,
    remove_quote::RemoveQuoteArgs,
    search::SearchArgs,
    show_quotes::ShowQuotesArgs,
};
use crate::core::filter::SortField;

#[derive(Parser)]
#[command(name = "libris")]
#[command(author, version, about = "A command-line catalog for books and the quotes worth keeping")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Database file (default: the platform data directory)
    #[arg(long, global = true, env = "LIBRIS_DB")]
    pub db: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the database file and its tables
    CreateDb,

    /// Check the database and report table status
    Check,

    /// Add a book to the catalog
    Add(AddArgs),

    /// Remove a book, narrowing by title and/or author
    Remove(RemoveArgs),

    /// List every book with sorting
    List(ListArgs),

    /// Search books by any combination of criteria
    Search(SearchArgs),

    /// Attach a quote to a book
    AddQuote(AddQuoteArgs),

    /// Remove one of a book's quotes by position
    RemoveQuote(RemoveQuoteArgs),

    /// Show the quotes of matching books
    ShowQuotes(ShowQuotesArgs),

    /// Export the catalog to a CSV file
    Export(ExportArgs),

    /// Delete every book and quote, keeping the tables
    ClearDb(ClearDbArgs),

    /// Edit a book's fields
    Edit(EditArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Output shape for list/search results
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Boxed table
    #[default]
    Table,
    /// Numbered lines
    Plain,
    /// Comma-separated values (for piping)
    Csv,
    /// JSON (for programming)
    Json,
}

/// Sortable fields, as accepted on the command line
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortBy {
    #[default]
    Title,
    Author,
    Year,
    Genre,
}

impl From<SortBy> for SortField {
    fn from(sort_by: SortBy) -> Self {
        match sort_by {
            SortBy::Title => SortField::Title,
            SortBy::Author => SortField::Author,
            SortBy::Year => SortField::Year,
            SortBy::Genre => SortField::Genre,
        }
    }
}
