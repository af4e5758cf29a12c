//! On-disk locations shared by the updater and the ShipIt installer.
//!
//! Both processes derive every path from the same application identifier, so
//! neither has to pass locations to the other.

pub mod error;
pub mod identifier;
pub mod layout;
pub mod manager;
pub mod provider;

pub use error::{DirectoryError, DirectoryResult};
pub use identifier::{resolve_identifier, Identifier, IdentifierSource, ProcessIdentity};
pub use layout::{Layout, Location, DOWNLOAD_DIR_NAME, SHIPIT_STATE_FILE_NAME, UNPACK_DIR_NAME};
pub use manager::DirectoryManager;
pub use provider::{FixedRootProvider, PlatformProvider, SupportDirProvider};
