use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::engine::{clean, run};
use crate::error::ClosestError;
use crate::matcher::{ExactName, MatchMode, RegexName};
use crate::results::Results;

// ---------------------------------------------------------------------------
// SearchBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing an upward search.
///
/// Created via [`closest::search()`](crate::search). Configure with chained
/// builder methods, then call [`run()`](SearchBuilder::run) to execute.
/// The request is consumed by `run()` and cannot change afterwards.
///
/// # Example
///
/// ```rust,no_run
/// let results = closest::search(r"^Cargo\.(toml|lock)$")
///     .regex(true)
///     .all(true)
///     .run()?;
///
/// for path in results.paths() {
///     println!("{}", path.display());
/// }
/// # Ok::<(), closest::ClosestError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SearchBuilder {
    pattern: String,
    mode:    MatchMode,
    all:     bool,
    start:   Option<PathBuf>,
}

impl SearchBuilder {
    pub(crate) fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            mode:    MatchMode::Exact,
            all:     false,
            start:   None,
        }
    }

    // ── Matching ──────────────────────────────────────────────────────────

    /// Treat the pattern as a regular expression tested against the bare
    /// names of every entry in each visited directory.
    ///
    /// Off by default: the pattern is a literal name joined onto each
    /// directory.
    pub fn regex(mut self, yes: bool) -> Self {
        self.mode = if yes { MatchMode::Regex } else { MatchMode::Exact };
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Keep walking to the root and collect every match.
    ///
    /// Off by default: the walk stops at the first directory with a match.
    pub fn all(mut self, yes: bool) -> Self {
        self.all = yes;
        self
    }

    /// Start from `dir` instead of the process working directory.
    ///
    /// Relative paths are resolved against the working directory.
    pub fn start(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start = Some(dir.into());
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Execute the search and return results.
    ///
    /// # Errors
    ///
    /// Pattern errors ([`ClosestError::EmptyName`],
    /// [`ClosestError::InvalidPattern`]) are returned before the filesystem
    /// is touched. After that the walk fails with
    /// [`ClosestError::DirectoryUnreadable`] on the first level that cannot
    /// be checked, or [`ClosestError::NotFound`] when nothing matched up to
    /// and including the root.
    pub fn run(self) -> Result<Results, ClosestError> {
        debug!(pattern = %self.pattern, mode = %self.mode, all = self.all, "starting search");

        match self.mode {
            MatchMode::Exact => {
                let matcher = ExactName::new(self.pattern)?;
                let start = resolve_start(self.start.as_deref())?;
                run(&start, &matcher, self.all)
            }
            MatchMode::Regex => {
                let matcher = RegexName::new(self.pattern)?;
                let start = resolve_start(self.start.as_deref())?;
                run(&start, &matcher, self.all)
            }
        }
    }
}

/// Absolute, lexically clean starting directory.
fn resolve_start(start: Option<&Path>) -> Result<PathBuf, ClosestError> {
    let dir = match start {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => current_dir()?.join(dir),
        None => current_dir()?,
    };
    Ok(clean(&dir))
}

fn current_dir() -> Result<PathBuf, ClosestError> {
    env::current_dir().map_err(ClosestError::NoWorkingDirectory)
}
