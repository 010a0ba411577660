//! Repository path and browse-URL resolution.
//!
//! # Module Structure
//!
//! | Module     | Purpose                                         |
//! |------------|-------------------------------------------------|
//! | `error`    | `ResolveError`                                  |
//! | `root`     | `RootLocation`, build-time root discovery       |
//! | `path`     | `RelativePath`, location from filesystem path   |
//! | `resolver` | `PathResolver` (relative path, blob/dir URLs)   |
//!
//! # Example
//!
//! ```text
//! root      /repo
//! location  file:///repo/src/pages/posts/2024/01/hello.md
//! relative  /src/pages/posts/2024/01/hello.md
//! url       https://github.com/take4s5i/blog/blob/main/src/pages/posts/2024/01/hello.md
//! dir url   https://github.com/take4s5i/blog/blob/main/src/pages/posts/2024/01
//! ```

mod error;
mod path;
mod resolver;
mod root;

pub use error::ResolveError;
pub use path::{RelativePath, location_from_path};
pub use resolver::PathResolver;
pub use root::{RootLocation, SELF_LOCATION, SELF_SUFFIX, resolve_repo_root};

/// Scheme every location starts with.
pub const SCHEME: &str = "file://";

/// Remote repository hosting the blog sources.
pub const DEFAULT_REPO_URL: &str = "https://github.com/take4s5i/blog";

/// Branch browse URLs point at.
pub const DEFAULT_BRANCH: &str = "main";
