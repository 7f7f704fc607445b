//! `libris add-quote` - attach a quote to a book

use console::style;
use miette::Result;

use crate::cli::commands::utils::{open_library, pick_match, report_failure};
use crate::cli::GlobalOpts;
use crate::core::{search, SearchCriteria};

#[derive(clap::Args, Debug)]
pub struct AddQuoteArgs {
    /// Match part of the title
    #[arg(long)]
    pub title: String,

    /// Match part of the author
    #[arg(long)]
    pub author: String,

    /// The quote text
    #[arg(long)]
    pub quote: String,

    /// Pick this 1-based entry when several books match
    #[arg(long)]
    pub select: Option<usize>,
}

pub fn run(args: AddQuoteArgs, global: &GlobalOpts) -> Result<()> {
    let mut library = open_library(global)?;

    let criteria = SearchCriteria {
        title: Some(args.title),
        author: Some(args.author),
        ..Default::default()
    };
    let matches = search(library.books(), &criteria);
    let picked = pick_match(&matches, args.select, "quote").map(|b| (b.id, b.title.clone()));

    let Some((Some(id), title)) = picked else {
        return Ok(());
    };

    match library.append_quote(id, &args.quote) {
        Ok(()) => {
            if !global.quiet {
                println!("{} added quote to '{}'", style("✓").green(), title);
            }
        }
        Err(e) => report_failure("could not add the quote", &e),
    }
    Ok(())
}
