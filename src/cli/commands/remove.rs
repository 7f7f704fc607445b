//! `libris remove` - remove a book, narrowing by title and/or author

use console::style;
use miette::Result;

use crate::cli::commands::utils::{open_library, pick_match, report_failure};
use crate::cli::GlobalOpts;
use crate::core::{search, SearchCriteria};

#[derive(clap::Args, Debug)]
pub struct RemoveArgs {
    /// Match part of the title
    #[arg(long)]
    pub title: Option<String>,

    /// Match part of the author
    #[arg(long)]
    pub author: Option<String>,

    /// Pick this 1-based entry when several books match
    #[arg(long)]
    pub select: Option<usize>,
}

pub fn run(args: RemoveArgs, global: &GlobalOpts) -> Result<()> {
    let mut library = open_library(global)?;

    let criteria = SearchCriteria {
        title: args.title,
        author: args.author,
        ..Default::default()
    };
    let matches = search(library.books(), &criteria);
    let picked = pick_match(&matches, args.select, "remove").map(|b| (b.id, b.title.clone()));

    // Mirror books always carry an id; a book without one never
    // reaches an identity-keyed mutation.
    let Some((Some(id), title)) = picked else {
        return Ok(());
    };

    match library.remove(id) {
        Ok(()) => {
            if !global.quiet {
                println!("{} removed '{}'", style("✓").green(), title);
            }
        }
        Err(e) => report_failure("could not remove the book", &e),
    }
    Ok(())
}
