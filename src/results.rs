use std::path::{Path, PathBuf};
use std::time::Duration;

/// A single match found during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// Absolute path of the matching file or directory.
    pub path: PathBuf,

    /// Parent hops from the starting directory. The start itself is 0.
    pub depth: usize,
}

/// The output of a completed search.
///
/// `hits` is never empty: a walk that matches nothing returns
/// [`ClosestError::NotFound`](crate::ClosestError::NotFound) instead.
#[derive(Debug)]
pub struct Results {
    /// Matches ordered nearest directory first. Within one directory the
    /// order is ascending by name for regex searches.
    pub hits: Vec<Hit>,

    /// Walk statistics.
    pub stats: ScanStats,
}

impl Results {
    /// Matched paths in discovery order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.hits.iter().map(|h| h.path.as_path())
    }

    pub fn into_paths(self) -> Vec<PathBuf> {
        self.hits.into_iter().map(|h| h.path).collect()
    }
}

/// Statistics for a completed walk.
#[derive(Debug, Clone, Copy)]
pub struct ScanStats {
    /// Directory levels probed, including the starting directory.
    pub levels: usize,

    /// Candidates stat'ed (exact mode) or entries examined (regex mode).
    pub entries: usize,

    /// Wall-clock time from walk start to completion.
    pub duration: Duration,
}
