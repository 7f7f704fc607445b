//! `libris clear-db` - delete every book and quote, keeping the tables

use console::style;
use dialoguer::Confirm;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::utils::{open_library, report_failure};
use crate::cli::GlobalOpts;

#[derive(clap::Args, Debug)]
pub struct ClearDbArgs {
    /// Confirm that every book and quote should be deleted
    #[arg(long)]
    pub confirm: bool,

    /// Skip the interactive confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn run(args: ClearDbArgs, global: &GlobalOpts) -> Result<()> {
    if !args.confirm {
        println!("Use: libris clear-db --confirm");
        return Ok(());
    }

    if !args.yes {
        let proceed = Confirm::new()
            .with_prompt("Delete every book and quote?")
            .default(false)
            .interact()
            .into_diagnostic()?;
        if !proceed {
            println!("Clear cancelled.");
            return Ok(());
        }
    }

    let mut library = open_library(global)?;
    match library.clear() {
        Ok(()) => {
            if !global.quiet {
                println!("{} all books and quotes deleted.", style("✓").green());
            }
        }
        Err(e) => report_failure("could not clear the catalog", &e),
    }
    Ok(())
}
