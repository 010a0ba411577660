//! Root-relative repository path.

use std::fmt;
use std::path::Path;

use super::{ResolveError, RootLocation, SCHEME};

/// Path of a module relative to the repository root.
///
/// Invariants:
/// - Always starts with `/`
/// - Never percent-encoded, separators are kept as given
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(String);

impl RelativePath {
    /// Strip the `file://<root>` prefix from `location`.
    ///
    /// The remainder must start with `/`, which also rejects locations that
    /// merely share a name prefix with the root (`/repo` vs `/repository`).
    pub fn strip(root: &RootLocation, location: &str) -> Result<Self, ResolveError> {
        let prefix = root.location_prefix();
        let Some(rest) = location.strip_prefix(prefix.as_str()) else {
            return Err(ResolveError::malformed(
                location,
                format!("expected prefix `{prefix}`"),
            ));
        };

        if !rest.starts_with('/') {
            return Err(ResolveError::malformed(
                location,
                format!("not inside repository root `{prefix}`"),
            ));
        }

        Ok(Self(rest.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Containing directory: the path with its final `/segment` removed.
    ///
    /// A top-level file (`/README.md`) yields the empty string, so that the
    /// directory URL is the bare blob URL of the branch.
    pub fn parent(&self) -> &str {
        match self.0.rfind('/') {
            Some(idx) => &self.0[..idx],
            None => "",
        }
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RelativePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Build a location string from a filesystem path.
///
/// Relative paths are made absolute against the current directory. No
/// percent-encoding is applied.
pub fn location_from_path(path: &Path) -> std::io::Result<String> {
    let abs = std::path::absolute(path)?;
    let abs = abs.to_string_lossy().replace('\\', "/");
    if abs.starts_with('/') {
        Ok(format!("{SCHEME}{abs}"))
    } else {
        // Windows drive paths: file:///C:/...
        Ok(format!("{SCHEME}/{abs}"))
    }
}
