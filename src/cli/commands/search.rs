//! `libris search` - search books by any combination of criteria

use console::style;
use miette::Result;

use crate::cli::commands::utils::open_library;
use crate::cli::output::print_books;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{search, SearchCriteria};

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Match part of the title (case-insensitive)
    #[arg(long)]
    pub title: Option<String>,

    /// Match part of the author (case-insensitive)
    #[arg(long)]
    pub author: Option<String>,

    /// Match the exact publication year
    #[arg(long)]
    pub year: Option<i32>,

    /// Match part of the genre (case-insensitive)
    #[arg(long)]
    pub genre: Option<String>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "table")]
    pub format: OutputFormat,
}

pub fn run(args: SearchArgs, global: &GlobalOpts) -> Result<()> {
    let library = open_library(global)?;

    let criteria = SearchCriteria {
        title: args.title,
        author: args.author,
        year: args.year,
        genre: args.genre,
    };
    let results = search(library.books(), &criteria);

    if results.is_empty() {
        println!("{} no books matched.", style("✗").red());
        return Ok(());
    }

    let terminal = matches!(args.format, OutputFormat::Table | OutputFormat::Plain);
    if terminal && !global.quiet {
        println!("Found {} books.", style(results.len()).cyan());
    }

    print_books(&results, args.format)
}
