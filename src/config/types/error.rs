//! Configuration error types.

use super::FieldPath;
use owo_colors::{OwoColorize, Stream::Stderr};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    // No #[from]: source() would print the diagnostics twice
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// One problem with a `blog.toml` field.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    /// Attach a fix suggestion.
    pub fn hint(&mut self, hint: impl Into<String>) -> &mut Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = "→";
        writeln!(f, "[{}]", self.field.as_str().if_supports_color(Stderr, |t| t.cyan()))?;
        write!(f, "{} {}", arrow.if_supports_color(Stderr, |t| t.red()), self.message)?;
        if let Some(hint) = &self.hint {
            let label = "hint:";
            write!(f, "\n  {} {}", label.if_supports_color(Stderr, |t| t.yellow()), hint)?;
        }
        Ok(())
    }
}

/// Errors and warnings collected while validating `blog.toml`.
///
/// ```ignore
/// diag.error(RepoConfig::URL, "invalid URL").hint("use https://github.com/<org>/<repo>");
/// ```
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    warnings: Vec<(FieldPath, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; the returned diagnostic can take a hint.
    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) -> &mut ConfigDiagnostic {
        self.errors.push(ConfigDiagnostic {
            field,
            message: message.into(),
            hint: None,
        });
        let last = self.errors.len() - 1;
        &mut self.errors[last]
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push((field, message.into()));
    }

    pub fn print_warnings(&self) {
        for (field, message) in &self.warnings {
            crate::log!("warning"; "[{}] {}", field.as_str(), message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[(FieldPath, String)] {
        &self.warnings
    }

    /// `Err(self)` when any error was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.has_errors() { Err(self) } else { Ok(()) }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = "invalid blog.toml:";
        writeln!(f, "{}", title.if_supports_color(Stderr, |t| t.bold()))?;
        for err in &self.errors {
            write!(f, "\n{err}\n")?;
        }
        if self.errors.len() > 1 {
            write!(f, "\n{} errors", self.errors.len())?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
