//! Fan-out replacement of duplicate set-list files
//!
//! An asset tree carries one `setList.txt` per subdirectory, all of which
//! must mirror a single master copy (`setList.master.txt`). This crate walks
//! a tree, collects every duplicate instance outside the excluded path
//! segments, and overwrites each one with the master payload.
//!
//! The replacement phase is deliberately best-effort: it stops at the first
//! write failure and never rolls back writes already applied. Callers are
//! expected to gate it behind operator confirmation and to surface a partial
//! failure loudly.

pub mod error;
pub mod replacer;

pub use error::{Error, Result};
pub use replacer::{DEFAULT_EXCLUDED_SEGMENTS, MASTER_NAME, SetListReplacer};
