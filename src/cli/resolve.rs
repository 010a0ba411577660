//! `root`, `path`, `url`, `dir-url` and `blob` commands.

use anyhow::Result;
use std::io::{self, Write};

use super::{LocateArgs, common::collect_locations};
use crate::{
    config::{BlogConfig, RootSource},
    debug,
    repo::{PathResolver, ResolveError},
};

/// What `locate` prints for each location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateKind {
    /// Root-relative path
    Path,
    /// Browse URL of the file
    Url,
    /// Browse URL of the containing directory
    DirUrl,
}

impl LocateKind {
    fn render(self, resolver: &PathResolver, location: &str) -> Result<String> {
        let out = match self {
            Self::Path => resolver.relative_path(location)?.to_string(),
            Self::Url => resolver.browsable_url(location)?,
            Self::DirUrl => resolver.directory_url(location)?,
        };
        Ok(out)
    }
}

/// Print the repository root. Fails when no root could be resolved.
pub fn print_root(config: &BlogConfig) -> Result<()> {
    println!("{}", root_path(config)?);
    Ok(())
}

/// Root as a path. An empty root only means "unresolved" when it was inferred
/// from the build location; a given root of `/` trims to empty as well.
fn root_path(config: &BlogConfig) -> Result<&str, ResolveError> {
    match config.root_source {
        RootSource::SelfLocation => config.root.require(),
        _ if config.root.is_empty() => Ok("/"),
        _ => Ok(config.root.as_str()),
    }
}

/// Resolve every location in `args` and print one result per line.
pub fn locate(args: &LocateArgs, kind: LocateKind, config: &BlogConfig) -> Result<()> {
    let locations = collect_locations(&args.locations, args.file)?;
    debug!("resolve"; "{} location(s) against `{}`", locations.len(), config.root);

    let mut stdout = io::stdout().lock();
    write_located(&config.resolver(), &locations, kind, &mut stdout)
}

/// Print the browse URL of each repository-relative path.
pub fn blob(paths: &[String], config: &BlogConfig) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_blobs(&config.resolver(), paths, &mut stdout)
}

fn write_located(
    resolver: &PathResolver,
    locations: &[String],
    kind: LocateKind,
    out: &mut impl Write,
) -> Result<()> {
    for location in locations {
        writeln!(out, "{}", kind.render(resolver, location)?)?;
    }
    out.flush()?;
    Ok(())
}

fn write_blobs(resolver: &PathResolver, paths: &[String], out: &mut impl Write) -> Result<()> {
    for path in paths {
        writeln!(out, "{}", resolver.blob_url(path))?;
    }
    out.flush()?;
    Ok(())
}
