//! Configuration file generation.
//!
//! Creates a commented `blog.toml` for a blog checkout.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::{config::RepoConfig, log};

/// Generate blog.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# blog configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str(&RepoConfig::template());

    out
}

/// Write the config template to `path`, or print it when `dry_run` is set.
///
/// An existing file is never overwritten.
pub fn new_config(path: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    write_config(path)?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}

fn write_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "'{}' already exists.\n\
             Remove it first or pass --dry to print the template.",
            path.display()
        );
    }

    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlogConfig;
    use tempfile::TempDir;

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blog.toml");
        write_config(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[repo]"));
        assert!(content.contains("branch = \"main\""));
    }

    #[test]
    fn test_written_config_loads_and_validates() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blog.toml");
        write_config(&path).unwrap();

        let config = BlogConfig::from_path(&path).unwrap();
        config.validate().unwrap();
        assert_eq!(config.repo, RepoConfig::default());
    }

    #[test]
    fn test_config_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blog.toml");
        fs::write(&path, "custom content").unwrap();

        assert!(write_config(&path).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "custom content");
    }
}
