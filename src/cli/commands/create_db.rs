//! `libris create-db` - create the database file and its tables

use console::style;
use miette::Result;

use crate::cli::GlobalOpts;
use crate::core::config::resolve_db_path;
use crate::core::BookStore;

pub fn run(global: &GlobalOpts) -> Result<()> {
    let path = resolve_db_path(global.db.as_deref());

    if path.exists() {
        println!(
            "{} database already exists at {}",
            style("✗").red(),
            path.display()
        );
        return Ok(());
    }

    BookStore::create(&path).map_err(|e| miette::miette!("{}", e))?;

    if !global.quiet {
        println!("{} created {}", style("✓").green(), path.display());
        println!("  tables: books, quotes");
    }
    Ok(())
}
