//! blog - repository path and browse-URL resolver.

use anyhow::{Context, Result};
use blog::{
    cli::{
        Cli, Commands, init,
        resolve::{self, LocateKind},
    },
    config::BlogConfig,
    logger,
};
use clap::{ColorChoice, Parser};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // init must work even when an existing blog.toml is invalid
    let load = || BlogConfig::load(&cli);

    match &cli.command {
        Commands::Init { dry } => {
            let cwd =
                std::env::current_dir().context("Failed to get current working directory")?;
            init::new_config(&cwd.join(&cli.config), *dry)
        }
        Commands::Root => resolve::print_root(&load()?),
        Commands::Path { args } => resolve::locate(args, LocateKind::Path, &load()?),
        Commands::Url { args } => resolve::locate(args, LocateKind::Url, &load()?),
        Commands::DirUrl { args } => resolve::locate(args, LocateKind::DirUrl, &load()?),
        Commands::Blob { paths } => resolve::blob(paths, &load()?),
    }
}
