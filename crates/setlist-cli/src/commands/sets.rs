//! Sets command implementation
//!
//! Inspection surface over the registry model: the flat entry list, or the
//! derived set -> foil variant mapping.

use std::path::Path;

use colored::Colorize;

use setlist_registry::{foil_mapping, foil_mapping_from, load_entries, load_entries_from};

use crate::error::Result;

/// Run the sets command.
///
/// With `foils` set, prints the mapping sorted by set name; otherwise prints
/// the entry list in registry order. `source_dir` overrides the environment
/// resolution of the registry location.
pub fn run_sets(foils: bool, source_dir: Option<&Path>) -> Result<()> {
    if foils {
        let mapping = match source_dir {
            Some(dir) => foil_mapping_from(dir)?,
            None => foil_mapping()?,
        };

        let mut pairs: Vec<_> = mapping.into_iter().collect();
        pairs.sort();

        for (name, foil) in pairs {
            if foil.is_empty() {
                println!("{name}");
            } else {
                println!("{} -> {}", name, foil.cyan());
            }
        }
    } else {
        let entries = match source_dir {
            Some(dir) => load_entries_from(dir)?,
            None => load_entries()?,
        };

        for entry in entries {
            println!("{entry}");
        }
    }

    Ok(())
}
