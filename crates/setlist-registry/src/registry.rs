//! Entry loading and foil-variant mapping

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::source::{SET_LIST_NAME, source_path};

/// Suffix for a set defined as the foil version of another set
pub const FOIL_SUFFIX: &str = " Foil";

/// Whether an entry names a foil printing
pub fn is_foil(entry: &str) -> bool {
    entry.contains(FOIL_SUFFIX)
}

/// Base set name of an entry, with any foil marker removed
pub fn base_name(entry: &str) -> String {
    entry.replace(FOIL_SUFFIX, "")
}

/// Foil-variant name for a base set name
pub fn foil_name(base: &str) -> String {
    format!("{base}{FOIL_SUFFIX}")
}

/// Load the registry entries using the `SETLIST` environment resolution.
///
/// Returns the ordered entry list, one per line, each trimmed of surrounding
/// whitespace. Interior blank lines are preserved as empty entries, but a
/// terminating newline on the last line does not produce one, and an empty
/// file yields an empty list rather than an error.
pub fn load_entries() -> Result<Vec<String>> {
    load_path(&source_path())
}

/// Load the registry entries from `<dir>/setList.txt`.
pub fn load_entries_from(dir: &Path) -> Result<Vec<String>> {
    load_path(&dir.join(SET_LIST_NAME))
}

fn load_path(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path).map_err(|e| Error::source_io(path, e))?;

    let entries: Vec<String> = raw.lines().map(|line| line.trim().to_string()).collect();
    tracing::debug!(count = entries.len(), path = %path.display(), "loaded set list");

    Ok(entries)
}

/// Derive the `set -> foil variant` mapping from an entry sequence.
///
/// Sets without a known foil variant map to the empty string. A foil entry
/// always claims the slot for its base name, even when the base name was seen
/// first; a repeated non-foil entry never overwrites an existing slot.
pub fn derive_foil_mapping(entries: &[String]) -> HashMap<String, String> {
    let mut mapping = HashMap::new();

    for entry in entries {
        if is_foil(entry) {
            mapping.insert(base_name(entry), entry.clone());
        } else {
            mapping.entry(entry.clone()).or_default();
        }
    }

    mapping
}

/// Load the registry and derive its foil mapping, following the same
/// environment resolution as [`load_entries`].
pub fn foil_mapping() -> Result<HashMap<String, String>> {
    Ok(derive_foil_mapping(&load_entries()?))
}

/// Load `<dir>/setList.txt` and derive its foil mapping.
pub fn foil_mapping_from(dir: &Path) -> Result<HashMap<String, String>> {
    Ok(derive_foil_mapping(&load_entries_from(dir)?))
}
