//! Shared plumbing for CLI commands

use console::style;
use miette::Result;

use crate::cli::resolver::{FixedResolver, PromptResolver, Resolver};
use crate::cli::GlobalOpts;
use crate::core::config::resolve_db_path;
use crate::core::store::StoreError;
use crate::core::{BookStore, Library};
use crate::model::Book;

/// Open the store and load the mirror.
///
/// A missing database aborts the command with a hint. A load failure
/// is reported and the command proceeds against an empty mirror, so a
/// degraded store reads as an empty catalog rather than a crash.
pub fn open_library(global: &GlobalOpts) -> Result<Library> {
    let path = resolve_db_path(global.db.as_deref());
    let store = BookStore::open(&path).map_err(|e| miette::miette!("{}", e))?;

    let mut library = Library::new(store);
    if let Err(e) = library.reload() {
        eprintln!(
            "{} could not load the catalog: {}",
            style("warning:").yellow().bold(),
            e
        );
    }
    Ok(library)
}

/// The search-then-disambiguate step shared by every command that
/// narrows to a single book.
///
/// Zero matches reports and yields `None`. One match is returned
/// directly. Several matches are listed in order and the resolver is
/// asked for a single 1-based choice; a failed resolution reports and
/// yields `None`. `select` carries a predetermined choice from a
/// `--select` flag.
pub fn pick_match<'a>(
    matches: &[&'a Book],
    select: Option<usize>,
    action: &str,
) -> Option<&'a Book> {
    match matches.len() {
        0 => {
            println!("{} no books matched.", style("✗").red());
            None
        }
        1 => Some(matches[0]),
        _ => {
            println!("Found {} matching books:", style(matches.len()).cyan());
            for (i, book) in matches.iter().enumerate() {
                println!("  {}. {}", i + 1, book);
            }

            let resolver: Box<dyn Resolver> = match select {
                Some(choice) => Box::new(FixedResolver { choice }),
                None => Box::new(PromptResolver {
                    prompt: format!("Number of the book to {action}"),
                }),
            };

            match resolver.select(matches.len()) {
                Some(index) => Some(matches[index]),
                None => {
                    println!("{} invalid selection; nothing changed.", style("✗").red());
                    None
                }
            }
        }
    }
}

/// Render an absorbed store failure.
///
/// The operation is treated as if it did not happen; the command still
/// exits successfully, matching the interactive contract.
pub fn report_failure(context: &str, err: &StoreError) {
    println!("{} {}: {}", style("✗").red(), context, err);
}
