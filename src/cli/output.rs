//! Rendering for book collections
//!
//! `list` and `search` share these formats. Table and plain are for
//! terminals; csv and json emit bare data for piping.

use std::io;

use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::args::OutputFormat;
use crate::cli::helpers::truncate_str;
use crate::model::Book;

/// Print a collection of books in the requested format.
pub fn print_books(books: &[&Book], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let mut builder = Builder::default();
            builder.push_record(["ID", "TITLE", "AUTHOR", "YEAR", "GENRE", "QUOTES"]);
            for book in books {
                builder.push_record([
                    id_cell(book),
                    truncate_str(&book.title, 40),
                    truncate_str(&book.author, 30),
                    book.year.to_string(),
                    truncate_str(&book.genre, 20),
                    book.quote_count().to_string(),
                ]);
            }
            println!("{}", builder.build().with(Style::sharp()));
        }
        OutputFormat::Plain => {
            for (i, book) in books.iter().enumerate() {
                println!(
                    "{}. {}, {}, {} quote(s)",
                    i + 1,
                    book,
                    book.genre,
                    book.quote_count()
                );
            }
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(io::stdout());
            writer
                .write_record(["id", "title", "author", "year", "genre", "quotes"])
                .into_diagnostic()?;
            for book in books {
                let id = id_cell(book);
                let year = book.year.to_string();
                let quotes = book.quote_count().to_string();
                writer
                    .write_record([
                        id.as_str(),
                        book.title.as_str(),
                        book.author.as_str(),
                        year.as_str(),
                        book.genre.as_str(),
                        quotes.as_str(),
                    ])
                    .into_diagnostic()?;
            }
            writer.flush().into_diagnostic()?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(books).into_diagnostic()?;
            println!("{json}");
        }
    }

    Ok(())
}

fn id_cell(book: &Book) -> String {
    book.id.map(|id| id.to_string()).unwrap_or_default()
}
