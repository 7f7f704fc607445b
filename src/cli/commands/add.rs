//! `libris add` - add a book to the catalog

use console::style;
use miette::Result;

use crate::cli::commands::utils::{open_library, report_failure};
use crate::cli::GlobalOpts;
use crate::model::Book;

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Book title
    #[arg(long)]
    pub title: String,

    /// Book author
    #[arg(long)]
    pub author: String,

    /// Publication year
    #[arg(long)]
    pub year: i32,

    /// Genre
    #[arg(long)]
    pub genre: String,
}

pub fn run(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let mut library = open_library(global)?;
    let book = Book::new(args.title, args.author, args.year, args.genre);
    let title = book.title.clone();

    match library.insert(book) {
        Ok(id) => {
            if !global.quiet {
                println!("{} added '{}' (book #{})", style("✓").green(), title, id);
            }
        }
        Err(e) => report_failure("could not add the book", &e),
    }
    Ok(())
}
