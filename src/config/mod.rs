//! Blog configuration management for `blog.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   └── repo       # [repo]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── util           # Config file discovery
//! └── mod.rs         # BlogConfig (this file)
//! ```
//!
//! # Repository root
//!
//! The first available source wins:
//!
//! | Source                     | Example                              |
//! |----------------------------|--------------------------------------|
//! | `--root` flag              | `blog --root ~/src/blog url ...`     |
//! | `BLOG_REPO_ROOT` variable  | `BLOG_REPO_ROOT=/srv/blog blog ...`  |
//! | `[repo] root`              | `root = "/srv/blog"`                 |
//! | directory of `blog.toml`   | `/srv/blog/blog.toml` -> `/srv/blog` |
//! | build-time self location   | crate manifest directory             |

pub mod section;
pub mod types;
mod util;

pub use section::RepoConfig;
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::{absolutize, find_config_file};

use crate::{
    cli::Cli,
    debug, log,
    repo::{PathResolver, ResolveError, RootLocation, resolve_repo_root},
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

/// Default config filename
pub const CONFIG_FILE: &str = "blog.toml";

/// Environment variable overriding the repository root.
pub const ROOT_ENV: &str = "BLOG_REPO_ROOT";

/// Where the repository root was taken from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RootSource {
    Cli,
    Env,
    Config,
    ConfigDir,
    #[default]
    SelfLocation,
}

impl fmt::Display for RootSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Cli => "--root",
            Self::Env => ROOT_ENV,
            Self::Config => "repo.root",
            Self::ConfigDir => "config directory",
            Self::SelfLocation => "build location",
        };
        f.write_str(s)
    }
}

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing blog.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogConfig {
    /// Absolute path to the config file, if one was found
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Resolved repository root
    #[serde(skip)]
    pub root: RootLocation,

    #[serde(skip)]
    pub root_source: RootSource,

    /// Remote repository settings
    #[serde(default)]
    pub repo: RepoConfig,
}

impl BlogConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. A missing file is not an
    /// error: defaults apply and the root falls back to the build location.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config_path = find_config_file(&cwd, &cli.config);

        let mut config = match &config_path {
            Some(path) => Self::from_path(path)?,
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                Self::default()
            }
        };
        config.config_path = config_path;
        config.validate()?;

        let env_root = std::env::var(ROOT_ENV).ok();
        config.finalize(cli.root.as_deref(), env_root.as_deref())?;

        debug!("config"; "root `{}` (from {})", config.root, config.root_source);
        Ok(config)
    }

    /// Resolve the repository root from the given overrides.
    pub fn finalize(
        &mut self,
        cli_root: Option<&Path>,
        env_root: Option<&str>,
    ) -> Result<(), ResolveError> {
        let (root, source) = self.resolve_root(cli_root, env_root)?;
        self.root = root;
        self.root_source = source;
        Ok(())
    }

    fn resolve_root(
        &self,
        cli_root: Option<&Path>,
        env_root: Option<&str>,
    ) -> Result<(RootLocation, RootSource), ResolveError> {
        if let Some(root) = cli_root {
            return Ok((RootLocation::from_dir(&absolutize(root)), RootSource::Cli));
        }

        if let Some(root) = env_root.map(str::trim).filter(|r| !r.is_empty()) {
            let root = absolutize(Path::new(root));
            return Ok((RootLocation::from_dir(&root), RootSource::Env));
        }

        if let Some(root) = &self.repo.root {
            return Ok((RootLocation::new(root), RootSource::Config));
        }

        if let Some(dir) = self.config_path.as_deref().and_then(Path::parent) {
            return Ok((RootLocation::from_dir(dir), RootSource::ConfigDir));
        }

        Ok((resolve_repo_root()?, RootSource::SelfLocation))
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse '{}'", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate all sections, reporting every problem at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.repo.validate(&mut diag);

        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Resolver bound to the configured root, remote and branch.
    pub fn resolver(&self) -> PathResolver {
        PathResolver::with_remote(self.root.clone(), &self.repo.url, &self.repo.branch)
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::{DEFAULT_BRANCH, DEFAULT_REPO_URL};
    use tempfile::TempDir;

    #[test]
    fn test_from_str_empty_uses_defaults() {
        let config = BlogConfig::from_str("").unwrap();
        assert_eq!(config.repo.url, DEFAULT_REPO_URL);
        assert_eq!(config.repo.branch, DEFAULT_BRANCH);
        assert!(config.repo.root.is_none());
    }

    #[test]
    fn test_from_str_repo_section() {
        let config = BlogConfig::from_str(
            r#"
            [repo]
            url = "https://github.com/me/notes"
            branch = "trunk"
            root = "/srv/notes"
            "#,
        )
        .unwrap();
        assert_eq!(config.repo.url, "https://github.com/me/notes");
        assert_eq!(config.repo.branch, "trunk");
        assert_eq!(config.repo.root.as_deref(), Some("/srv/notes"));
    }

    #[test]
    fn test_parse_with_ignored_collects_unknown() {
        let (config, ignored) = BlogConfig::parse_with_ignored(
            r#"
            [repo]
            branch = "main"
            brnach = "typo"

            [site]
            title = "blog"
            "#,
        )
        .unwrap();
        assert_eq!(config.repo.branch, "main");
        assert!(ignored.iter().any(|f| f == "repo.brnach"));
        assert!(ignored.iter().any(|f| f.starts_with("site")));
    }

    #[test]
    fn test_from_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "[repo]\nbranch = \"dev\"\n").unwrap();

        let config = BlogConfig::from_path(&path).unwrap();
        assert_eq!(config.repo.branch, "dev");
    }

    #[test]
    fn test_from_path_missing() {
        let temp = TempDir::new().unwrap();
        let err = BlogConfig::from_path(&temp.path().join(CONFIG_FILE)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(..))
        ));
    }

    #[test]
    fn test_from_path_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "[repo\n").unwrap();
        assert!(BlogConfig::from_path(&path).is_err());
    }

    #[test]
    fn test_validate_reports_diagnostics() {
        let config = BlogConfig::from_str("[repo]\nurl = \"nope\"\nbranch = \"\"\n").unwrap();
        let err = config.validate().unwrap_err();
        match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::Diagnostics(diag)) => assert_eq!(diag.len(), 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_root_precedence() {
        let mut config = BlogConfig::from_str("[repo]\nroot = \"/from/config\"\n").unwrap();
        config.config_path = Some(PathBuf::from("/from/dir/blog.toml"));

        config
            .finalize(Some(Path::new("/from/cli")), Some("/from/env"))
            .unwrap();
        assert_eq!(config.root.as_str(), "/from/cli");
        assert_eq!(config.root_source, RootSource::Cli);

        config.finalize(None, Some("/from/env")).unwrap();
        assert_eq!(config.root.as_str(), "/from/env");
        assert_eq!(config.root_source, RootSource::Env);

        config.finalize(None, Some("  ")).unwrap();
        assert_eq!(config.root.as_str(), "/from/config");
        assert_eq!(config.root_source, RootSource::Config);

        config.repo.root = None;
        config.finalize(None, None).unwrap();
        assert_eq!(config.root.as_str(), "/from/dir");
        assert_eq!(config.root_source, RootSource::ConfigDir);

        config.config_path = None;
        config.finalize(None, None).unwrap();
        assert_eq!(config.root, resolve_repo_root().unwrap());
        assert_eq!(config.root_source, RootSource::SelfLocation);
    }

    #[test]
    fn test_resolver_uses_config() {
        let mut config = BlogConfig::from_str("[repo]\nbranch = \"dev\"\n").unwrap();
        config.finalize(Some(Path::new("/repo")), None).unwrap();

        let url = config
            .resolver()
            .browsable_url("file:///repo/src/pages/index.md")
            .unwrap();
        assert_eq!(url, format!("{DEFAULT_REPO_URL}/blob/dev/src/pages/index.md"));
    }
}
