//! `libris edit` - edit a book's fields
//!
//! Only fields supplied as `--new-*` values change; the rest keep
//! their prior value. The quote sequence is never touched here.

use console::style;
use miette::Result;

use crate::cli::commands::utils::{open_library, pick_match, report_failure};
use crate::cli::GlobalOpts;
use crate::core::{search, SearchCriteria};

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Match part of the current title
    #[arg(long)]
    pub title: String,

    /// Match part of the current author
    #[arg(long)]
    pub author: String,

    /// New title
    #[arg(long)]
    pub new_title: Option<String>,

    /// New author
    #[arg(long)]
    pub new_author: Option<String>,

    /// New publication year
    #[arg(long)]
    pub new_year: Option<i32>,

    /// New genre
    #[arg(long)]
    pub new_genre: Option<String>,

    /// Pick this 1-based entry when several books match
    #[arg(long)]
    pub select: Option<usize>,
}

pub fn run(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    let mut library = open_library(global)?;

    let criteria = SearchCriteria {
        title: Some(args.title),
        author: Some(args.author),
        ..Default::default()
    };
    let matches = search(library.books(), &criteria);
    let picked = pick_match(&matches, args.select, "edit").map(|b| b.clone());

    let Some(book) = picked else {
        return Ok(());
    };
    let Some(id) = book.id else {
        return Ok(());
    };
    let old_title = book.title.clone();

    let mut updated = book;
    if let Some(title) = args.new_title {
        updated.title = title;
    }
    if let Some(author) = args.new_author {
        updated.author = author;
    }
    if let Some(year) = args.new_year {
        updated.year = year;
    }
    if let Some(genre) = args.new_genre {
        updated.genre = genre;
    }

    match library.update(id, updated) {
        Ok(()) => {
            if !global.quiet {
                println!("{} updated '{}'", style("✓").green(), old_title);
            }
        }
        Err(e) => report_failure("could not update the book", &e),
    }
    Ok(())
}
