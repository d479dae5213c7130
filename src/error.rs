use std::path::PathBuf;
use thiserror::Error;

use crate::matcher::MatchMode;

#[derive(Error, Debug)]
pub enum ClosestError {
    // Request
    #[error("file name must not be empty")]
    EmptyName,

    #[error("invalid regex pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    // Traversal
    #[error("cannot access {}", .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{mode} not found: {target}")]
    NotFound { mode: MatchMode, target: String },

    // Environment
    #[error("failed to get current directory")]
    NoWorkingDirectory(#[source] std::io::Error),
}

impl ClosestError {
    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::DirectoryUnreadable { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Whether the walk completed normally and simply matched nothing.
    ///
    /// Every other variant means the search could not be carried out.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_target() {
        let err = ClosestError::NotFound {
            mode:   MatchMode::Exact,
            target: "config.yaml".into(),
        };
        assert_eq!(err.to_string(), "file not found: config.yaml");
        assert!(err.is_not_found());
        assert!(err.path().is_none());

        let err = ClosestError::NotFound {
            mode:   MatchMode::Regex,
            target: r".*\.txt$".into(),
        };
        assert_eq!(err.to_string(), r"pattern not found: .*\.txt$");
    }

    #[test]
    fn unreadable_exposes_path_and_source() {
        use std::error::Error as _;

        let err = ClosestError::DirectoryUnreadable {
            path:   PathBuf::from("/locked"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.path(), Some(&PathBuf::from("/locked")));
        assert!(err.source().is_some());
        assert!(!err.is_not_found());
    }
}
