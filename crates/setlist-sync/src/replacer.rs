//! Per-run replacement state and the load/discover/replace phases

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use setlist_registry::SET_LIST_NAME;

use crate::error::{Error, Result};

/// Standardized name for the master set list on disk
pub const MASTER_NAME: &str = "setList.master.txt";

/// Path segments excluded from discovery by default.
///
/// These are derived-asset caches that deliberately hold stale copies.
pub const DEFAULT_EXCLUDED_SEGMENTS: &[&str] =
    &["cardCrops", "cardFulls", "cardText", "cardSymbols"];

/// Maintains the state of one replacement run.
///
/// A run proceeds through three strictly ordered phases: load the master
/// payload, discover duplicate set-list locations under a root, then write
/// the payload over every discovered location. Discovery is append-only and
/// the payload is immutable once loaded; there is no path back to an earlier
/// phase within a run.
#[derive(Debug, Default)]
pub struct SetListReplacer {
    /// Substrings that disqualify a candidate path
    excluded_segments: Vec<String>,
    /// Discovered duplicate locations, in traversal order
    locations: Vec<PathBuf>,
    /// Master payload, loaded once per run
    payload: Vec<u8>,
}

impl SetListReplacer {
    /// Create a replacer with an explicit exclusion list.
    pub fn new(excluded_segments: impl IntoIterator<Item = String>) -> Self {
        Self {
            excluded_segments: excluded_segments.into_iter().collect(),
            locations: Vec::new(),
            payload: Vec::new(),
        }
    }

    /// Create a replacer with the standard asset-cache exclusions.
    pub fn with_default_exclusions() -> Self {
        Self::new(DEFAULT_EXCLUDED_SEGMENTS.iter().map(|s| s.to_string()))
    }

    /// Load the master payload from `setList.master.txt` in the working
    /// directory.
    ///
    /// A missing or unreadable master is fatal to the run; discovery must not
    /// start without a payload to distribute.
    pub fn load_master(&mut self) -> Result<()> {
        self.load_master_from(Path::new("."))
    }

    /// Load the master payload from `<dir>/setList.master.txt`.
    pub fn load_master_from(&mut self, dir: &Path) -> Result<()> {
        let path = dir.join(MASTER_NAME);
        self.payload = fs::read(&path).map_err(|e| Error::master(&path, e))?;
        tracing::debug!(bytes = self.payload.len(), path = %path.display(), "loaded master set list");
        Ok(())
    }

    /// The master payload loaded for this run.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Whether a candidate path survives the exclusion list.
    ///
    /// Exclusion is plain substring matching over the whole path, not
    /// path-segment-boundary matching.
    pub fn is_path_accepted(&self, path: &Path) -> bool {
        let text = path.to_string_lossy();
        !self
            .excluded_segments
            .iter()
            .any(|segment| text.contains(segment.as_str()))
    }

    /// Walk `root` and collect every accepted `setList.txt` location.
    ///
    /// Siblings are visited in file-name order, so the resulting sequence is
    /// deterministic for a given tree. Exclusion filters candidates without
    /// pruning traversal: children of an excluded directory are still
    /// visited and rejected individually. Traversal errors abort discovery.
    pub fn discover(&mut self, root: &Path) -> Result<&[PathBuf]> {
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;

            if !self.is_path_accepted(entry.path()) {
                continue;
            }

            if entry.file_type().is_file() && entry.file_name() == SET_LIST_NAME {
                self.locations.push(entry.path().to_path_buf());
            }
        }

        tracing::debug!(count = self.locations.len(), root = %root.display(), "discovery complete");
        Ok(&self.locations)
    }

    /// Discovered duplicate locations, in traversal order.
    pub fn locations(&self) -> &[PathBuf] {
        &self.locations
    }

    /// Overwrite every discovered location with the master payload.
    ///
    /// Whole-file replacement, in discovery order. Stops at the first write
    /// failure and leaves earlier writes in place; the caller must warn the
    /// operator that on-disk state may be inconsistent.
    pub fn apply_replacements(&self) -> Result<usize> {
        for path in &self.locations {
            fs::write(path, &self.payload).map_err(|e| Error::write(path, e))?;
            tracing::debug!(path = %path.display(), "replaced set list");
        }

        Ok(self.locations.len())
    }
}
