//! Directory Manager
//!
//! Resolves the locations Squirrel and ShipIt share. Nothing is cached: every
//! query re-derives its path and recreates missing directories, so a tree
//! removed by another process comes back on the next call.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::error::{DirectoryError, DirectoryResult};
use crate::identifier::{resolve_identifier, Identifier, IdentifierSource, ProcessIdentity};
use crate::layout::{Layout, Location};
use crate::provider::{ensure_dir, PlatformProvider, SupportDirProvider};

static CURRENT_APPLICATION: OnceCell<DirectoryManager> = OnceCell::new();

/// Provides the file locations for one application identifier.
#[derive(Clone)]
pub struct DirectoryManager {
    identifier: Identifier,
    provider: Arc<dyn SupportDirProvider>,
}

impl DirectoryManager {
    /// The shared manager for the running application, keyed by its bundle
    /// identifier or, failing that, its executable name.
    ///
    /// Initialised once per process; later calls return the same instance. A
    /// failed derivation is not memoized.
    pub fn current_application() -> DirectoryResult<&'static DirectoryManager> {
        CURRENT_APPLICATION.get_or_try_init(|| Self::current_application_with(&ProcessIdentity))
    }

    /// A fresh, unshared manager for the identifier `source` yields.
    pub fn current_application_with(source: &dyn IdentifierSource) -> DirectoryResult<Self> {
        let identifier = resolve_identifier(source)?;
        Ok(Self::with_provider(identifier, Arc::new(PlatformProvider)))
    }

    /// A manager storing files in the platform data directory for
    /// `app_identifier`, e.g. the installer job's own label.
    pub fn with_identifier(app_identifier: impl Into<String>) -> DirectoryResult<Self> {
        let identifier = Identifier::new(app_identifier)?;
        Ok(Self::with_provider(identifier, Arc::new(PlatformProvider)))
    }

    pub fn with_provider(identifier: Identifier, provider: Arc<dyn SupportDirProvider>) -> Self {
        Self {
            identifier,
            provider,
        }
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Finds or creates the application support directory.
    pub async fn application_support_dir(&self) -> DirectoryResult<PathBuf> {
        self.resolve(Location::ApplicationSupport).await
    }

    /// Finds or creates the directory update downloads are staged in.
    pub async fn download_dir(&self) -> DirectoryResult<PathBuf> {
        self.resolve(Location::Downloads).await
    }

    /// Finds or creates the directory updates are unpacked into before
    /// installation.
    pub async fn unpack_dir(&self) -> DirectoryResult<PathBuf> {
        self.resolve(Location::Unpacked).await
    }

    /// Where ShipIt persists its state. The parent directory exists once this
    /// resolves; the file itself is left alone.
    pub async fn shipit_state_path(&self) -> DirectoryResult<PathBuf> {
        self.resolve(Location::ShipItState).await
    }

    /// Resolves `location` on the blocking thread pool.
    ///
    /// Must be awaited inside a Tokio runtime. The directory exists by the
    /// time the returned future completes.
    pub async fn resolve(&self, location: Location) -> DirectoryResult<PathBuf> {
        let manager = self.clone();
        tokio::task::spawn_blocking(move || manager.resolve_blocking(location))
            .await
            .map_err(|e| DirectoryError::unavailable(location, None, io::Error::other(e)))?
    }

    /// Resolves every location at once.
    pub async fn layout(&self) -> DirectoryResult<Layout> {
        let manager = self.clone();
        tokio::task::spawn_blocking(move || manager.layout_blocking())
            .await
            .map_err(|e| {
                DirectoryError::unavailable(Location::ApplicationSupport, None, io::Error::other(e))
            })?
    }

    /// Synchronous form of [`DirectoryManager::resolve`], for callers without
    /// a runtime.
    pub fn resolve_blocking(&self, location: Location) -> DirectoryResult<PathBuf> {
        let root = self.support_root()?;
        let path = location.path_under(&root);
        if location.is_directory() && location != Location::ApplicationSupport {
            ensure_dir(&path).map_err(|e| DirectoryError::unavailable(location, Some(path.clone()), e))?;
        }
        Ok(path)
    }

    pub fn layout_blocking(&self) -> DirectoryResult<Layout> {
        let root = self.support_root()?;
        let layout = Layout::under(&self.identifier, &root);
        for location in [Location::Downloads, Location::Unpacked] {
            let path = layout.get(location);
            ensure_dir(path).map_err(|e| DirectoryError::unavailable(location, Some(path.to_path_buf()), e))?;
        }
        Ok(layout)
    }

    fn support_root(&self) -> DirectoryResult<PathBuf> {
        let root = self
            .provider
            .locate_or_create(&self.identifier)
            .map_err(|e| DirectoryError::unavailable(Location::ApplicationSupport, None, e))?;

        if !root.is_dir() {
            let err = if root.exists() {
                io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} exists and is not a directory", root.display()),
                )
            } else {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{} does not exist", root.display()),
                )
            };
            return Err(DirectoryError::unavailable(Location::ApplicationSupport, Some(root), err));
        }
        Ok(root)
    }
}

impl fmt::Debug for DirectoryManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryManager")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}
