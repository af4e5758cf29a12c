//! Directory Layout
//!
//! The fixed names under an application support root:
//!
//! ```text
//! <application support>/
//!     download/            staged update downloads
//!     unpack/              unpacked update payloads
//!     ShipItState.plist    installer state, written by ShipIt
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::identifier::Identifier;

pub const DOWNLOAD_DIR_NAME: &str = "download";
pub const UNPACK_DIR_NAME: &str = "unpack";
pub const SHIPIT_STATE_FILE_NAME: &str = "ShipItState.plist";

/// One of the locations a manager can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    ApplicationSupport,
    Downloads,
    Unpacked,
    ShipItState,
}

impl Location {
    pub const ALL: [Location; 4] = [
        Location::ApplicationSupport,
        Location::Downloads,
        Location::Unpacked,
        Location::ShipItState,
    ];

    /// Name of the entry below the application support root, if any.
    pub fn entry_name(self) -> Option<&'static str> {
        match self {
            Location::ApplicationSupport => None,
            Location::Downloads => Some(DOWNLOAD_DIR_NAME),
            Location::Unpacked => Some(UNPACK_DIR_NAME),
            Location::ShipItState => Some(SHIPIT_STATE_FILE_NAME),
        }
    }

    /// Whether resolving this location creates a directory at the path itself.
    pub fn is_directory(self) -> bool {
        !matches!(self, Location::ShipItState)
    }

    pub fn path_under(self, root: &Path) -> PathBuf {
        match self.entry_name() {
            Some(name) => root.join(name),
            None => root.to_path_buf(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Location::ApplicationSupport => "application support",
            Location::Downloads => "download",
            Location::Unpacked => "unpack",
            Location::ShipItState => "ShipIt state",
        };
        f.write_str(name)
    }
}

/// Every resolved location for one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub identifier: String,
    pub application_support: PathBuf,
    pub downloads: PathBuf,
    pub unpacked: PathBuf,
    pub shipit_state: PathBuf,
}

impl Layout {
    pub(crate) fn under(identifier: &Identifier, root: &Path) -> Self {
        Self {
            identifier: identifier.to_string(),
            application_support: Location::ApplicationSupport.path_under(root),
            downloads: Location::Downloads.path_under(root),
            unpacked: Location::Unpacked.path_under(root),
            shipit_state: Location::ShipItState.path_under(root),
        }
    }

    pub fn get(&self, location: Location) -> &Path {
        match location {
            Location::ApplicationSupport => &self.application_support,
            Location::Downloads => &self.downloads,
            Location::Unpacked => &self.unpacked,
            Location::ShipItState => &self.shipit_state,
        }
    }
}
