//! `libris list` - list every book with sorting

use console::style;
use miette::Result;

use crate::cli::commands::utils::open_library;
use crate::cli::output::print_books;
use crate::cli::{GlobalOpts, OutputFormat, SortBy};
use crate::core::sort_books;

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Field to sort by
    #[arg(long, value_enum, default_value = "title")]
    pub sort_by: SortBy,

    /// Reverse the sort order
    #[arg(long, short = 'r')]
    pub reverse: bool,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "table")]
    pub format: OutputFormat,
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let library = open_library(global)?;

    if library.books().is_empty() {
        println!("The catalog is empty.");
        return Ok(());
    }

    let sorted = sort_books(
        library.books().iter().collect(),
        args.sort_by.into(),
        args.reverse,
    );

    // Machine formats carry bare data; the header is for terminals.
    let terminal = matches!(args.format, OutputFormat::Table | OutputFormat::Plain);
    if terminal && !global.quiet {
        println!("Books in the catalog: {}", style(sorted.len()).cyan());
    }

    print_books(&sorted, args.format)
}
