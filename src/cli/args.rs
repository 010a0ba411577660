//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Repository path and browse-URL resolver for the blog
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: blog.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "blog.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Repository root, overriding BLOG_REPO_ROOT and the config file
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented blog.toml into the current directory
    #[command(visible_alias = "i")]
    Init {
        /// Print the config template to stdout instead of writing it
        #[arg(short, long)]
        dry: bool,
    },

    /// Print the resolved repository root
    Root,

    /// Print the root-relative path of each location
    #[command(visible_alias = "p")]
    Path {
        #[command(flatten)]
        args: LocateArgs,
    },

    /// Print the browse URL of each location
    #[command(visible_alias = "u")]
    Url {
        #[command(flatten)]
        args: LocateArgs,
    },

    /// Print the browse URL of the directory containing each location
    #[command(visible_alias = "d")]
    DirUrl {
        #[command(flatten)]
        args: LocateArgs,
    },

    /// Print the browse URL of repository-relative paths
    #[command(visible_alias = "b")]
    Blob {
        /// Paths relative to the repository root (e.g. src/pages/index.md)
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<String>,
    },
}

/// Location arguments shared by `path`, `url` and `dir-url`.
#[derive(clap::Args, Debug, Clone)]
pub struct LocateArgs {
    /// Locations of the form file:///abs/path.
    /// Use `-` to read locations from stdin (one per line).
    #[arg(required = true, value_name = "LOCATION")]
    pub locations: Vec<String>,

    /// Treat arguments as filesystem paths instead of file:// locations
    #[arg(short, long)]
    pub file: bool,
}
