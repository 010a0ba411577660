//! Repository path and browse-URL resolution for the take4s5i blog.
//!
//! Content modules identify themselves by a `file://` location. [`repo`]
//! turns such a location into a path relative to the repository root and
//! into a GitHub URL for the file or its directory.

pub mod cli;
pub mod config;
pub mod logger;
pub mod repo;

pub use config::BlogConfig;
pub use repo::{PathResolver, RelativePath, ResolveError, RootLocation};
