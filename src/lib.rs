//! # closest
//!
//! Find the closest file or pattern by walking up from the current directory.
//!
//! Starting at a directory (the process working directory by default),
//! closest probes each level and then moves to its parent, until a match is
//! found or the filesystem root has been checked. Two strategies are built
//! in:
//!
//! - **exact name**: join a literal name onto each directory and check that
//!   it exists ([`ExactName`]).
//! - **regex**: list each directory and test every entry's bare name against
//!   a regular expression ([`RegexName`]).
//!
//! By default the walk stops at the first directory with a match. With
//! `.all(true)` it continues to the root and returns every match, nearest
//! directory first.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! // Nearest .editorconfig above the working directory
//! let paths = closest::find_by_name(".editorconfig", false)?;
//! println!("{}", paths[0].display());
//!
//! // Every Cargo manifest or lockfile between here and the root
//! let results = closest::search(r"^Cargo\.(toml|lock)$")
//!     .regex(true)
//!     .all(true)
//!     .run()?;
//! for hit in &results.hits {
//!     println!("{} ({} levels up)", hit.path.display(), hit.depth);
//! }
//! # Ok::<(), closest::ClosestError>(())
//! ```
//!
//! # Errors
//!
//! A search either returns a complete, non-empty result or a
//! [`ClosestError`]. Unreadable levels abort the walk; they are never
//! skipped.

#![forbid(unsafe_code)]

pub mod engine;

mod builder;
mod error;
mod matcher;
mod results;

use std::path::PathBuf;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::SearchBuilder;
pub use error::ClosestError;
pub use matcher::{ExactName, MatchMode, Matcher, Probe, RegexName};
pub use results::{Hit, Results, ScanStats};

// ── Entry points ──────────────────────────────────────────────────────────────

/// Create a new [`SearchBuilder`] for `pattern`.
///
/// The pattern is a literal name unless [`.regex(true)`](SearchBuilder::regex)
/// is set.
pub fn search(pattern: impl Into<String>) -> SearchBuilder {
    SearchBuilder::new(pattern)
}

/// Look for `filename` in the working directory and each of its ancestors.
///
/// Returns the nearest match, or every match nearest first when
/// `collect_all` is set.
pub fn find_by_name(filename: &str, collect_all: bool) -> Result<Vec<PathBuf>, ClosestError> {
    search(filename).all(collect_all).run().map(Results::into_paths)
}

/// Look for entries whose names match `pattern` in the working directory
/// and each of its ancestors.
///
/// Without `collect_all`, returns the first matching entry of the nearest
/// directory that has one.
pub fn find_by_regex(pattern: &str, collect_all: bool) -> Result<Vec<PathBuf>, ClosestError> {
    search(pattern)
        .regex(true)
        .all(collect_all)
        .run()
        .map(Results::into_paths)
}
