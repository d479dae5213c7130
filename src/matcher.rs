use std::fmt;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use regex::Regex;

use crate::engine::clean;
use crate::error::ClosestError;

/// How a pattern is tested against each visited directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The pattern is a literal name joined onto the directory.
    Exact,

    /// The pattern is a regular expression tested against entry names.
    Regex,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => f.write_str("file"),
            Self::Regex => f.write_str("pattern"),
        }
    }
}

/// What a single directory level yielded.
#[derive(Debug, Default)]
pub struct Probe {
    /// Matching paths at this level, in the order they were found.
    pub paths: Vec<PathBuf>,

    /// Candidates stat'ed or entries examined at this level.
    pub examined: usize,
}

/// Tests one directory level during the upward walk.
///
/// The engine calls [`probe`](Matcher::probe) once per ancestor, nearest
/// first. Implementations must not touch anything outside `dir`.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use closest::{ClosestError, MatchMode, Matcher, Probe};
///
/// /// Matches any directory that is a git checkout.
/// struct GitRoot;
///
/// impl Matcher for GitRoot {
///     fn mode(&self) -> MatchMode { MatchMode::Exact }
///     fn target(&self) -> &str { ".git" }
///     fn probe(&self, dir: &Path, _first_only: bool) -> Result<Probe, ClosestError> {
///         let candidate = dir.join(".git");
///         let paths = if candidate.is_dir() { vec![candidate] } else { Vec::new() };
///         Ok(Probe { paths, examined: 1 })
///     }
/// }
/// ```
pub trait Matcher {
    /// Which kind of lookup this is. Used for error reporting.
    fn mode(&self) -> MatchMode;

    /// The raw pattern as the caller supplied it.
    fn target(&self) -> &str;

    /// Examine `dir`. With `first_only`, stop after the first match.
    ///
    /// Any error aborts the whole walk; there is no skipping of levels.
    fn probe(&self, dir: &Path, first_only: bool) -> Result<Probe, ClosestError>;
}

// ---------------------------------------------------------------------------
// ExactName
// ---------------------------------------------------------------------------

/// Looks for a literal name (possibly containing separators) at each level.
#[derive(Debug, Clone)]
pub struct ExactName {
    raw:      String,
    relative: PathBuf,
}

impl ExactName {
    pub fn new(name: impl Into<String>) -> Result<Self, ClosestError> {
        let raw = name.into();
        if raw.is_empty() {
            return Err(ClosestError::EmptyName);
        }
        let relative = relative_to_any(Path::new(&raw));
        Ok(Self { raw, relative })
    }
}

impl Matcher for ExactName {
    fn mode(&self) -> MatchMode {
        MatchMode::Exact
    }

    fn target(&self) -> &str {
        &self.raw
    }

    fn probe(&self, dir: &Path, _first_only: bool) -> Result<Probe, ClosestError> {
        let candidate = clean(&dir.join(&self.relative));
        match fs::metadata(&candidate) {
            Ok(_) => Ok(Probe {
                paths:    vec![candidate],
                examined: 1,
            }),
            Err(e) if is_absent(&e) => Ok(Probe {
                paths:    Vec::new(),
                examined: 1,
            }),
            Err(source) => Err(ClosestError::DirectoryUnreadable {
                path: candidate,
                source,
            }),
        }
    }
}

/// Drop root and prefix components so the name always lands inside the
/// directory it is joined onto.
fn relative_to_any(name: &Path) -> PathBuf {
    name.components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect()
}

fn is_absent(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

// ---------------------------------------------------------------------------
// RegexName
// ---------------------------------------------------------------------------

/// Tests a regular expression against every entry name in each level.
///
/// The match is an unanchored search over the bare name, so `txt` matches
/// `notes.txt`. Use `^`/`$` to anchor. Entries are examined in ascending
/// name order.
#[derive(Debug, Clone)]
pub struct RegexName {
    raw:   String,
    regex: Regex,
}

impl RegexName {
    pub fn new(pattern: impl Into<String>) -> Result<Self, ClosestError> {
        let raw = pattern.into();
        let regex = Regex::new(&raw).map_err(|source| ClosestError::InvalidPattern {
            pattern: raw.clone(),
            source,
        })?;
        Ok(Self { raw, regex })
    }
}

impl Matcher for RegexName {
    fn mode(&self) -> MatchMode {
        MatchMode::Regex
    }

    fn target(&self) -> &str {
        &self.raw
    }

    fn probe(&self, dir: &Path, first_only: bool) -> Result<Probe, ClosestError> {
        let unreadable = |source: io::Error| ClosestError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source,
        };

        let mut names = fs::read_dir(dir)
            .map_err(unreadable)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(unreadable)?;
        names.sort();

        let mut probe = Probe::default();
        for name in names {
            probe.examined += 1;
            if self.regex.is_match(&name.to_string_lossy()) {
                probe.paths.push(dir.join(&name));
                if first_only {
                    break;
                }
            }
        }
        Ok(probe)
    }
}
