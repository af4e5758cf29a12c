//! Application Identifiers
//!
//! The identifier scopes every resolved path. The default one is derived from
//! the running process through a pluggable [`IdentifierSource`].

use std::ffi::OsStr;
use std::fmt;
use std::path::{Component, Path};

use crate::error::{DirectoryError, DirectoryResult};

/// Environment variable LaunchServices sets for bundled macOS applications.
const BUNDLE_IDENTIFIER_ENV: &str = "__CFBundleIdentifier";

/// A non-empty name that is safe to use as a single path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(value: impl Into<String>) -> DirectoryResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DirectoryError::invalid_identifier("identifier must not be empty"));
        }

        if trimmed.contains('\0') {
            return Err(DirectoryError::invalid_identifier("identifier must not contain NUL bytes"));
        }

        let mut components = Path::new(trimmed).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => {
                return Err(DirectoryError::invalid_identifier(format!(
                    "'{}' is not a single path segment",
                    trimmed
                )))
            }
        }
        // `Path::components` normalises away trailing separators.
        if trimmed.contains(&['/', '\\'][..]) {
            return Err(DirectoryError::invalid_identifier(format!(
                "'{}' contains a path separator",
                trimmed
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for Identifier {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

/// Where the default manager gets its identifier from.
pub trait IdentifierSource {
    fn bundle_identifier(&self) -> Option<String>;

    fn application_name(&self) -> Option<String>;
}

/// Identity of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessIdentity;

impl IdentifierSource for ProcessIdentity {
    fn bundle_identifier(&self) -> Option<String> {
        std::env::var(BUNDLE_IDENTIFIER_ENV).ok()
    }

    fn application_name(&self) -> Option<String> {
        let from_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| file_stem(&exe));
        from_exe.or_else(|| {
            std::env::args_os()
                .next()
                .and_then(|arg0| file_stem(Path::new(&arg0)))
        })
    }
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(OsStr::to_str)
        .map(str::to_string)
}

/// Bundle identifier first, then application name.
pub fn resolve_identifier(source: &dyn IdentifierSource) -> DirectoryResult<Identifier> {
    let candidates = [source.bundle_identifier(), source.application_name()];
    for candidate in candidates.into_iter().flatten() {
        match Identifier::new(candidate) {
            Ok(identifier) => return Ok(identifier),
            Err(e) => tracing::debug!("Skipping identifier candidate: {}", e),
        }
    }

    Err(DirectoryError::invalid_identifier(
        "neither a bundle identifier nor an application name is available",
    ))
}
