use clap::{CommandFactory, Parser};
use miette::{IntoDiagnostic, Result};

use libris::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    // Bare invocation prints usage and succeeds.
    let Some(command) = cli.command else {
        Cli::command().print_help().into_diagnostic()?;
        return Ok(());
    };

    match command {
        Commands::CreateDb => libris::cli::commands::create_db::run(&global),
        Commands::Check => libris::cli::commands::check::run(&global),
        Commands::Add(args) => libris::cli::commands::add::run(args, &global),
        Commands::Remove(args) => libris::cli::commands::remove::run(args, &global),
        Commands::List(args) => libris::cli::commands::list::run(args, &global),
        Commands::Search(args) => libris::cli::commands::search::run(args, &global),
        Commands::AddQuote(args) => libris::cli::commands::add_quote::run(args, &global),
        Commands::RemoveQuote(args) => libris::cli::commands::remove_quote::run(args, &global),
        Commands::ShowQuotes(args) => libris::cli::commands::show_quotes::run(args, &global),
        Commands::Export(args) => libris::cli::commands::export::run(args, &global),
        Commands::ClearDb(args) => libris::cli::commands::clear_db::run(args, &global),
        Commands::Edit(args) => libris::cli::commands::edit::run(args, &global),
        Commands::Completions(args) => libris::cli::commands::completions::run(args),
    }
}
