//! `libris check` - probe the database and report its state

use console::style;
use miette::Result;

use crate::cli::GlobalOpts;
use crate::core::config::resolve_db_path;
use crate::core::BookStore;

pub fn run(global: &GlobalOpts) -> Result<()> {
    let path = resolve_db_path(global.db.as_deref());

    let store = match BookStore::open(&path) {
        Ok(store) => store,
        Err(e) => {
            println!("{} {}", style("✗").red(), e);
            return Ok(());
        }
    };

    let status = store.status().map_err(|e| miette::miette!("{}", e))?;

    println!("Database: {}", path.display());
    println!("Table 'books':  {}", yes_no(status.books_table));
    println!("Table 'quotes': {}", yes_no(status.quotes_table));
    println!("Books stored:   {}", style(status.book_count).cyan());
    Ok(())
}

fn yes_no(present: bool) -> console::StyledObject<&'static str> {
    if present {
        style("yes").green()
    } else {
        style("no").red()
    }
}
