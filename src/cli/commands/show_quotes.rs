//! `libris show-quotes` - show the quotes of matching books
//!
//! With no criteria every book is considered; with criteria the set is
//! narrowed first.

use console::style;
use miette::Result;

use crate::cli::commands::utils::open_library;
use crate::cli::GlobalOpts;
use crate::core::{search, SearchCriteria};

#[derive(clap::Args, Debug)]
pub struct ShowQuotesArgs {
    /// Match part of the title
    #[arg(long)]
    pub title: Option<String>,

    /// Match part of the author
    #[arg(long)]
    pub author: Option<String>,
}

pub fn run(args: ShowQuotesArgs, global: &GlobalOpts) -> Result<()> {
    let library = open_library(global)?;

    let criteria = SearchCriteria {
        title: args.title,
        author: args.author,
        ..Default::default()
    };
    let books = search(library.books(), &criteria);

    if books.is_empty() {
        println!("{} no books matched.", style("✗").red());
        return Ok(());
    }

    let mut found = false;
    for book in &books {
        if book.quotes.is_empty() {
            continue;
        }
        if found {
            println!();
        }
        println!("Quotes from '{}':", book.title);
        for (i, quote) in book.quotes.iter().enumerate() {
            println!("  {}. {}", i + 1, quote);
        }
        found = true;
    }

    if !found {
        println!("No quotes found.");
    }
    Ok(())
}
