//! Resolver error types.

use thiserror::Error;

/// Errors raised while deriving repository paths and URLs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The location does not carry the expected `file://<root>` prefix,
    /// or a non-empty root was required but none could be resolved.
    #[error("bad location `{location}`: {reason}")]
    MalformedLocation { location: String, reason: String },
}

impl ResolveError {
    pub fn malformed(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedLocation {
            location: location.into(),
            reason: reason.into(),
        }
    }
}
