//! Registry source resolution
//!
//! The registry lives at `<dir>/setList.txt`. The directory defaults to the
//! process working directory and may be overridden through the `SETLIST`
//! environment variable.

use std::ffi::OsString;
use std::path::PathBuf;

/// Standardized name for a set list on disk
pub const SET_LIST_NAME: &str = "setList.txt";

/// Environment variable naming the directory that holds the registry
pub const SETLIST_ENV: &str = "SETLIST";

/// Resolve the effective registry path from the environment.
///
/// An unset or empty `SETLIST` variable means the current directory.
pub fn source_path() -> PathBuf {
    resolve(std::env::var_os(SETLIST_ENV))
}

fn resolve(overridden: Option<OsString>) -> PathBuf {
    let dir = match overridden {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from("."),
    };
    dir.join(SET_LIST_NAME)
}
