//! `libris export` - export the catalog to a CSV file
//!
//! One row per book, header first, quotes joined with a literal `|`.

use std::path::PathBuf;

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::utils::open_library;
use crate::cli::GlobalOpts;

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Output file
    #[arg(long, default_value = "export.csv")]
    pub file: PathBuf,
}

pub fn run(args: ExportArgs, global: &GlobalOpts) -> Result<()> {
    let library = open_library(global)?;

    let mut writer = csv::Writer::from_path(&args.file).into_diagnostic()?;
    writer
        .write_record(["title", "author", "year", "genre", "quotes"])
        .into_diagnostic()?;

    for book in library.books() {
        let year = book.year.to_string();
        let quotes = book.quotes.join("|");
        writer
            .write_record([
                book.title.as_str(),
                book.author.as_str(),
                year.as_str(),
                book.genre.as_str(),
                quotes.as_str(),
            ])
            .into_diagnostic()?;
    }
    writer.flush().into_diagnostic()?;

    if !global.quiet {
        println!(
            "{} exported {} books to {}",
            style("✓").green(),
            library.books().len(),
            args.file.display()
        );
    }
    Ok(())
}
