use std::path::{Component, Path, PathBuf};
use std::time::Instant;

use tracing::{debug, trace};

use crate::error::ClosestError;
use crate::matcher::Matcher;
use crate::results::{Hit, Results, ScanStats};

// ---------------------------------------------------------------------------
// Root detection
// ---------------------------------------------------------------------------

/// The directory one level up from `dir`, or `None` when `dir` is a root.
///
/// A root is detected structurally: it has no parent, or its parent is
/// itself. This holds for `/` as well as drive and UNC roots.
pub fn parent_dir(dir: &Path) -> Option<&Path> {
    match dir.parent() {
        Some(parent) if parent != dir && !parent.as_os_str().is_empty() => Some(parent),
        _ => None,
    }
}

/// Whether `dir` is the top of its filesystem.
pub fn is_root(dir: &Path) -> bool {
    parent_dir(dir).is_none()
}

/// Lexically resolve `.` and `..` components without touching the
/// filesystem. `..` at the root stays at the root.
pub fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let at_top = matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_)) | Some(Component::ParentDir)
                );
                if !at_top {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Walk from `start` up to the root, probing every level with `matcher`.
///
/// Levels are visited nearest first and hits keep that order. Without
/// `collect_all` the walk ends at the first level that yields a match.
/// Any probe error aborts the walk and no partial results are returned.
pub(crate) fn run<M: Matcher>(
    start: &Path,
    matcher: &M,
    collect_all: bool,
) -> Result<Results, ClosestError> {
    let started = Instant::now();

    let mut hits     = Vec::new();
    let mut levels   = 0;
    let mut examined = 0;
    let mut dir      = start;
    let mut depth    = 0;

    loop {
        debug!(dir = %dir.display(), depth, "probing level");

        let probe = matcher.probe(dir, !collect_all)?;
        levels += 1;
        examined += probe.examined;

        for path in probe.paths {
            trace!(path = %path.display(), depth, "match");
            hits.push(Hit { path, depth });
        }

        if !collect_all && !hits.is_empty() {
            break;
        }

        match parent_dir(dir) {
            Some(parent) => {
                dir = parent;
                depth += 1;
            }
            None => break,
        }
    }

    let stats = ScanStats {
        levels,
        entries: examined,
        duration: started.elapsed(),
    };
    debug!(
        matches = hits.len(),
        levels = stats.levels,
        entries = stats.entries,
        "walk finished"
    );

    if hits.is_empty() {
        return Err(ClosestError::NotFound {
            mode:   matcher.mode(),
            target: matcher.target().to_string(),
        });
    }

    Ok(Results { hits, stats })
}
