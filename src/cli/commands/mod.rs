//! Command implementations, one module per subcommand

pub mod add;
pub mod add_quote;
pub mod check;
pub mod clear_db;
pub mod completions;
pub mod create_db;
pub mod edit;
pub mod export;
pub mod list;
pub mod remove;
pub mod remove_quote;
pub mod search;
pub mod show_quotes;
pub mod utils;
