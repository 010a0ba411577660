//! `[repo]` section configuration.
//!
//! Describes the remote repository browse URLs point at, and optionally
//! where the local checkout lives.
//!
//! # Example
//!
//! ```toml
//! [repo]
//! url = "https://github.com/take4s5i/blog"
//! branch = "main"
//! root = "/home/me/src/blog"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::repo::{DEFAULT_BRANCH, DEFAULT_REPO_URL};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoConfig {
    /// Remote repository URL (e.g., "https://github.com/take4s5i/blog").
    pub url: String,

    /// Branch browse URLs point at.
    pub branch: String,

    /// Absolute path of the local checkout.
    /// Defaults to the directory containing `blog.toml`.
    pub root: Option<String>,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_REPO_URL.into(),
            branch: DEFAULT_BRANCH.into(),
            root: None,
        }
    }
}

impl RepoConfig {
    pub const URL: FieldPath = FieldPath::new("repo.url");
    pub const BRANCH: FieldPath = FieldPath::new("repo.branch");
    pub const ROOT: FieldPath = FieldPath::new("repo.root");

    /// Commented `[repo]` section for `blog init`.
    pub fn template() -> String {
        format!(
            "[repo]\n\
             # Remote repository browse URLs point at.\n\
             url = \"{DEFAULT_REPO_URL}\"\n\
             # Branch used in `/blob/<branch>/...` URLs.\n\
             branch = \"{DEFAULT_BRANCH}\"\n\
             # Absolute path of the local checkout (default: directory of this file).\n\
             # root = \"/path/to/blog\"\n"
        )
    }

    /// Validate repository configuration.
    ///
    /// # Checks
    /// - `url` must be a valid http(s) URL with a host
    /// - `branch` must be non-empty, without surrounding `/` or whitespace
    /// - `root`, if set, must be absolute
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.validate_url(diag);

        let branch = self.branch.as_str();
        if branch.trim().is_empty() {
            diag.error(Self::BRANCH, "branch must not be empty")
                .hint(format!("set {}, e.g.: \"{DEFAULT_BRANCH}\"", Self::BRANCH));
        } else if branch.starts_with('/')
            || branch.ends_with('/')
            || branch.chars().any(char::is_whitespace)
        {
            diag.error(Self::BRANCH, format!("invalid branch name '{branch}'"));
        }

        if let Some(root) = &self.root
            && !(root.starts_with('/') || Path::new(root).is_absolute())
        {
            diag.error(Self::ROOT, format!("root '{root}' is not an absolute path"))
                .hint(format!("remove {} to use the directory of blog.toml", Self::ROOT));
        }
    }

    fn validate_url(&self, diag: &mut ConfigDiagnostics) {
        let example = format!("use format like {DEFAULT_REPO_URL}");
        let parsed = match url::Url::parse(&self.url) {
            Ok(parsed) => parsed,
            Err(e) => {
                diag.error(Self::URL, format!("invalid URL: {e}")).hint(example);
                return;
            }
        };

        if !matches!(parsed.scheme(), "http" | "https") {
            let scheme = parsed.scheme();
            diag.error(Self::URL, format!("scheme '{scheme}' not supported, must be http or https"))
                .hint(example.clone());
        }
        match parsed.host_str() {
            None => {
                diag.error(Self::URL, "URL must have a valid host").hint(example);
            }
            Some(host) if host != "github.com" => diag.warn(
                Self::URL,
                format!("'{host}' may not serve GitHub-style `/blob/<branch>` URLs"),
            ),
            Some(_) => {}
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            diag.error(Self::URL, "URL must not carry a query or fragment");
        }
    }
}
