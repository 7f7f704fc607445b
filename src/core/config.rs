//! Database location resolution
//!
//! Priority: `--db` flag, then `LIBRIS_DB` (clap reads the variable
//! into the flag), then the platform data directory.

use std::path::{Path, PathBuf};

/// The default database location in the user's data directory.
///
/// Falls back to the working directory when the platform offers no
/// home (some containers).
pub fn default_db_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "libris")
        .map(|dirs| dirs.data_dir().join("library.db"))
        .unwrap_or_else(|| PathBuf::from("library.db"))
}

/// Resolve the database path from an optional override.
pub fn resolve_db_path(flag: Option<&Path>) -> PathBuf {
    match flag {
        Some(path) => path.to_path_buf(),
        None => default_db_path(),
    }
}
