//! Repository root discovery.
//!
//! The root is normally supplied from configuration (see `config::RepoConfig`).
//! When nothing is configured, it is inferred from this file's own build-time
//! location: `file://<manifest dir>/src/repo/root.rs` minus the known suffix.

use super::{ResolveError, SCHEME};
use std::fmt;
use std::path::Path;

/// Location of this source file as seen at build time.
pub const SELF_LOCATION: &str = concat!("file://", env!("CARGO_MANIFEST_DIR"), "/", file!());

/// Suffix identifying this file relative to the repository root.
pub const SELF_SUFFIX: &str = concat!("/", file!());

/// Repository root path, without scheme and without trailing `/`.
///
/// May be empty: an empty root means "no resolvable root". Operations that
/// only strip prefixes tolerate it, [`RootLocation::require`] does not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RootLocation(String);

impl RootLocation {
    /// Create from an explicit root path (e.g. `/home/me/blog`).
    ///
    /// A trailing `/` is trimmed, so `/repo/` and `/repo` are the same root.
    /// The filesystem root `/` therefore becomes the empty root.
    pub fn new(path: impl AsRef<str>) -> Self {
        Self(path.as_ref().trim_end_matches('/').to_string())
    }

    /// Create from a directory on disk, using `/` as separator.
    pub fn from_dir(dir: &Path) -> Self {
        Self::new(dir.to_string_lossy().replace('\\', "/"))
    }

    /// Derive the root from a module's own location and its expected suffix.
    ///
    /// # Rules
    /// - missing `file://` scheme -> `MalformedLocation`
    /// - location not ending in `suffix` -> empty root (not an error)
    /// - otherwise the location with scheme and suffix removed
    pub fn from_self_location(location: &str, suffix: &str) -> Result<Self, ResolveError> {
        let Some(rest) = location.strip_prefix(SCHEME) else {
            return Err(ResolveError::malformed(
                location,
                format!("missing `{SCHEME}` scheme"),
            ));
        };

        match rest.strip_suffix(suffix) {
            Some(root) => Ok(Self::new(root)),
            None => Ok(Self::default()),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The prefix every location under this root starts with.
    pub fn location_prefix(&self) -> String {
        format!("{SCHEME}{}", self.0)
    }

    /// Return the root, failing when it resolved to empty.
    pub fn require(&self) -> Result<&str, ResolveError> {
        if self.is_empty() {
            return Err(ResolveError::malformed(
                SELF_LOCATION,
                "no resolvable repository root",
            ));
        }
        Ok(&self.0)
    }
}

impl fmt::Display for RootLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve the root from this crate's build-time location.
pub fn resolve_repo_root() -> Result<RootLocation, ResolveError> {
    RootLocation::from_self_location(SELF_LOCATION, SELF_SUFFIX)
}
