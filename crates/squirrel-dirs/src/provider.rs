//! Support Directory Providers
//!
//! The operating-system capability this crate builds on: given an
//! identifier, locate or create its per-user application data directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::identifier::Identifier;

/// Locates or creates the application support root for an identifier.
///
/// Implementations must treat an existing directory as success and must
/// report every other failure instead of substituting another location.
pub trait SupportDirProvider: Send + Sync {
    fn locate_or_create(&self, identifier: &Identifier) -> io::Result<PathBuf>;
}

/// The platform's per-user data directory.
///
/// `~/Library/Application Support` on macOS, `$XDG_DATA_HOME` (or
/// `~/.local/share`) on Linux, `%APPDATA%` on Windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformProvider;

impl SupportDirProvider for PlatformProvider {
    fn locate_or_create(&self, identifier: &Identifier) -> io::Result<PathBuf> {
        let base = dirs::data_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine the per-user data directory",
            )
        })?;
        ensure_dir(&base.join(identifier))
    }
}

/// Resolves every identifier below a fixed root directory.
#[derive(Debug, Clone)]
pub struct FixedRootProvider {
    root: PathBuf,
}

impl FixedRootProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SupportDirProvider for FixedRootProvider {
    fn locate_or_create(&self, identifier: &Identifier) -> io::Result<PathBuf> {
        ensure_dir(&self.root.join(identifier))
    }
}

/// Create `path` and any missing ancestors. An existing directory is success;
/// anything else already at `path` is an error.
pub(crate) fn ensure_dir(path: &Path) -> io::Result<PathBuf> {
    if path.is_dir() {
        return Ok(path.to_path_buf());
    }

    fs::create_dir_all(path)?;
    tracing::debug!("Created directory {}", path.display());

    if !path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} exists and is not a directory", path.display()),
        ));
    }
    Ok(path.to_path_buf())
}
