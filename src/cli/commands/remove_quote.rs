//! `libris remove-quote` - remove one of a book's quotes by position
//!
//! Without `--index` the command lists the book's quotes and asks for
//! a 1-based position interactively.

use console::style;
use miette::Result;

use crate::cli::commands::utils::{open_library, pick_match, report_failure};
use crate::cli::resolver::{PromptResolver, Resolver};
use crate::cli::GlobalOpts;
use crate::core::{search, SearchCriteria};

#[derive(clap::Args, Debug)]
pub struct RemoveQuoteArgs {
    /// Match part of the title
    #[arg(long)]
    pub title: String,

    /// Match part of the author
    #[arg(long)]
    pub author: String,

    /// 1-based position of the quote to remove
    #[arg(long)]
    pub index: Option<usize>,

    /// Pick this 1-based entry when several books match
    #[arg(long)]
    pub select: Option<usize>,
}

pub fn run(args: RemoveQuoteArgs, global: &GlobalOpts) -> Result<()> {
    let mut library = open_library(global)?;

    let criteria = SearchCriteria {
        title: Some(args.title),
        author: Some(args.author),
        ..Default::default()
    };
    let matches = search(library.books(), &criteria);
    let picked =
        pick_match(&matches, args.select, "remove a quote from").map(|b| (b.id, b.title.clone(), b.quotes.clone()));

    let Some((Some(id), title, quotes)) = picked else {
        return Ok(());
    };

    if quotes.is_empty() {
        println!("'{title}' has no quotes.");
        return Ok(());
    }

    let position = match args.index {
        Some(0) => {
            println!("{} quote positions start at 1.", style("✗").red());
            return Ok(());
        }
        Some(n) => n,
        None => {
            println!("Quotes from '{title}':");
            for (i, quote) in quotes.iter().enumerate() {
                println!("  {}. {}", i + 1, quote);
            }

            let resolver = PromptResolver {
                prompt: "Number of the quote to remove".into(),
            };
            match resolver.select(quotes.len()) {
                Some(index) => index + 1,
                None => {
                    println!("{} invalid selection; nothing changed.", style("✗").red());
                    return Ok(());
                }
            }
        }
    };

    match library.remove_quote_at(id, position - 1) {
        Ok(true) => {
            if !global.quiet {
                println!(
                    "{} removed quote {} from '{}'",
                    style("✓").green(),
                    position,
                    title
                );
            }
        }
        Ok(false) => {
            println!("{} no quote at position {}.", style("✗").red(), position);
        }
        Err(e) => report_failure("could not remove the quote", &e),
    }
    Ok(())
}
