//! Location to repository path / browse URL resolution.

use super::{DEFAULT_BRANCH, DEFAULT_REPO_URL, RelativePath, ResolveError, RootLocation};

/// Resolves module locations against a repository root and remote.
///
/// Pure: every method depends only on its input and the values captured at
/// construction, so a resolver can be shared freely between threads.
///
/// # Example
/// ```
/// use blog::repo::{PathResolver, RootLocation};
///
/// let resolver = PathResolver::new(RootLocation::new("/repo"));
/// let url = resolver.browsable_url("file:///repo/src/pages/index.md").unwrap();
/// assert_eq!(url, "https://github.com/take4s5i/blog/blob/main/src/pages/index.md");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    root: RootLocation,
    repo_url: String,
    branch: String,
}

impl PathResolver {
    /// Resolver for the default remote (`take4s5i/blog` at `main`).
    pub fn new(root: RootLocation) -> Self {
        Self::with_remote(root, DEFAULT_REPO_URL, DEFAULT_BRANCH)
    }

    /// Resolver for an arbitrary remote and branch.
    pub fn with_remote(
        root: RootLocation,
        repo_url: impl AsRef<str>,
        branch: impl AsRef<str>,
    ) -> Self {
        Self {
            root,
            repo_url: repo_url.as_ref().trim_end_matches('/').to_string(),
            branch: branch.as_ref().trim_matches('/').to_string(),
        }
    }

    #[inline]
    pub fn root(&self) -> &RootLocation {
        &self.root
    }

    #[inline]
    pub fn repo_url(&self) -> &str {
        &self.repo_url
    }

    #[inline]
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// `<repo_url>/blob/<branch>`, the base every browse URL extends.
    pub fn blob_base(&self) -> String {
        format!("{}/blob/{}", self.repo_url, self.branch)
    }

    /// Path of `location` relative to the repository root.
    pub fn relative_path(&self, location: &str) -> Result<RelativePath, ResolveError> {
        RelativePath::strip(&self.root, location)
    }

    /// URL viewing `location` on the remote.
    pub fn browsable_url(&self, location: &str) -> Result<String, ResolveError> {
        let path = self.relative_path(location)?;
        Ok(format!("{}{}", self.blob_base(), path))
    }

    /// URL viewing the directory containing `location` on the remote.
    pub fn directory_url(&self, location: &str) -> Result<String, ResolveError> {
        let path = self.relative_path(location)?;
        Ok(format!("{}{}", self.blob_base(), path.parent()))
    }

    /// URL viewing an arbitrary repository-relative `path`.
    ///
    /// Leading `/` on `path` is optional: exactly one separator is emitted.
    pub fn blob_url(&self, path: &str) -> String {
        format!("{}/{}", self.blob_base(), path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://github.com/take4s5i/blog";

    fn resolver() -> PathResolver {
        PathResolver::new(RootLocation::new("/repo"))
    }

    #[test]
    fn test_post_scenario() {
        let r = resolver();
        let loc = "file:///repo/src/pages/posts/2024/01/hello.md";

        assert_eq!(
            r.relative_path(loc).unwrap().as_str(),
            "/src/pages/posts/2024/01/hello.md"
        );
        assert_eq!(
            r.browsable_url(loc).unwrap(),
            "https://github.com/take4s5i/blog/blob/main/src/pages/posts/2024/01/hello.md"
        );
    }

    #[test]
    fn test_browsable_url_is_base_plus_relative() {
        let r = resolver();
        for loc in [
            "file:///repo/a.md",
            "file:///repo/a/b.md",
            "file:///repo/examples/posts/2022/07/golang-chan/01/main.go",
        ] {
            let rel = r.relative_path(loc).unwrap();
            assert_eq!(
                r.browsable_url(loc).unwrap(),
                format!("{BASE}/blob/main{rel}")
            );
        }
    }

    #[test]
    fn test_directory_url_drops_last_segment() {
        let r = resolver();
        for loc in [
            "file:///repo/a.md",
            "file:///repo/a/b.md",
            "file:///repo/examples/posts/2022/07/golang-chan/01/main.go",
        ] {
            let file_url = r.browsable_url(loc).unwrap();
            let dir_url = r.directory_url(loc).unwrap();
            let idx = file_url.rfind('/').unwrap();
            assert_eq!(dir_url, &file_url[..idx]);
        }
    }

    #[test]
    fn test_directory_url_nested() {
        assert_eq!(
            resolver()
                .directory_url("file:///repo/examples/posts/2022/07/golang-chan/01/main.go")
                .unwrap(),
            "https://github.com/take4s5i/blog/blob/main/examples/posts/2022/07/golang-chan/01"
        );
    }

    #[test]
    fn test_malformed_location_propagates() {
        let r = resolver();
        assert!(matches!(
            r.relative_path("repo/a.md"),
            Err(ResolveError::MalformedLocation { .. })
        ));
        assert!(r.browsable_url("/repo/a.md").is_err());
        assert!(r.directory_url("http://repo/a.md").is_err());
    }

    #[test]
    fn test_blob_url() {
        let r = resolver();
        assert_eq!(r.blob_url("src/a.md"), format!("{BASE}/blob/main/src/a.md"));
        assert_eq!(r.blob_url("/src/a.md"), format!("{BASE}/blob/main/src/a.md"));
    }

    #[test]
    fn test_with_remote_normalizes() {
        let r = PathResolver::with_remote(
            RootLocation::new("/repo"),
            "https://example.com/me/site/",
            "/dev/",
        );
        assert_eq!(r.repo_url(), "https://example.com/me/site");
        assert_eq!(r.branch(), "dev");
        assert_eq!(
            r.browsable_url("file:///repo/x.md").unwrap(),
            "https://example.com/me/site/blob/dev/x.md"
        );
    }

    #[test]
    fn test_resolver_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PathResolver>();
    }
}
