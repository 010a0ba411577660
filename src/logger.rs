//! Colored `[module]` log lines on stderr.
//!
//! stdout carries command results only. Color follows `--color` through
//! `owo_colors::set_override`, otherwise whether stderr is a terminal.
//!
//! ```ignore
//! log!("init"; "wrote {}", path.display());
//! debug!("config"; "root `{}`", root);
//! ```

use owo_colors::{OwoColorize, Stream::Stderr};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// `log!("module"; "format {}", args)`
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {
        $crate::logger::log($module, &format!($($arg)*))
    };
}

/// Like `log!`, but only with `--verbose`.
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {
        if $crate::logger::is_verbose() {
            $crate::log!($module; $($arg)*)
        }
    };
}

pub fn log(module: &str, message: &str) {
    let line = format!("{} {message}", prefix(module));
    let mut err = std::io::stderr().lock();
    let _ = writeln!(err, "{line}");
}

/// `[module]`, colored by severity when stderr supports it.
fn prefix(module: &str) -> String {
    let tag = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "error" => tag.if_supports_color(Stderr, |t| t.bright_red()).to_string(),
        "warning" => tag.if_supports_color(Stderr, |t| t.yellow()).to_string(),
        "config" => tag.if_supports_color(Stderr, |t| t.bright_blue()).to_string(),
        _ => tag.if_supports_color(Stderr, |t| t.bright_green()).to_string(),
    }
}
