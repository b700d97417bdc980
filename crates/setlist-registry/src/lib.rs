//! Canonical set-list registry model
//!
//! A set list is a file named `setList.txt` in which each line is either a
//! set name or blank. Some sets exist a second time as a foil printing; those
//! entries carry the ` Foil` suffix after the base set name.
//!
//! This crate provides:
//!
//! - **Entry loading**: read the registry into an ordered, trimmed entry list
//! - **Foil mapping**: derive a `name -> foil variant` map with defined
//!   conflict-resolution rules (foil discovery always wins)
//! - **Source resolution**: locate the registry via the `SETLIST` environment
//!   override, falling back to the working directory

pub mod error;
pub mod registry;
pub mod source;

pub use error::{Error, Result};
pub use registry::{
    FOIL_SUFFIX, base_name, derive_foil_mapping, foil_mapping, foil_mapping_from, foil_name,
    is_foil, load_entries, load_entries_from,
};
pub use source::{SET_LIST_NAME, SETLIST_ENV, source_path};
