//! Command-line interface module.

mod args;
pub mod common;
pub mod init;
pub mod resolve;

pub use args::{Cli, Commands, LocateArgs};
