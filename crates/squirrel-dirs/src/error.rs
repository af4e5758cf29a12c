//! Error Types
//!
//! Failures surfaced by identifier construction and directory queries.

use std::io;
use std::path::PathBuf;

use crate::layout::Location;

/// Errors produced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// No usable identifier: empty input, a path-like value, or a default
    /// derivation that found neither a bundle identifier nor a name.
    #[error("invalid application identifier: {0}")]
    InvalidIdentifier(String),

    /// A location could not be found or created.
    #[error("{location} directory unavailable{}: {source}", display_path(.path))]
    DirectoryUnavailable {
        location: Location,
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },
}

impl DirectoryError {
    pub fn invalid_identifier(reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier(reason.into())
    }

    pub fn unavailable(location: Location, path: Option<PathBuf>, source: io::Error) -> Self {
        Self::DirectoryUnavailable {
            location,
            path,
            source,
        }
    }

    /// The location the failed query was resolving, if any.
    pub fn location(&self) -> Option<Location> {
        match self {
            Self::InvalidIdentifier(_) => None,
            Self::DirectoryUnavailable { location, .. } => Some(*location),
        }
    }

    /// The underlying I/O error kind for unavailable directories.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::InvalidIdentifier(_) => None,
            Self::DirectoryUnavailable { source, .. } => Some(source.kind()),
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" at {}", path.display()),
        None => String::new(),
    }
}

/// Result alias used throughout the crate.
pub type DirectoryResult<T> = Result<T, DirectoryError>;
