//! Configuration section definitions.
//!
//! Each module corresponds to a section in `blog.toml`:
//!
//! | Module | TOML Section | Purpose                              |
//! |--------|--------------|--------------------------------------|
//! | `repo` | `[repo]`     | Remote URL, branch, local checkout   |

mod repo;

pub use repo::RepoConfig;
