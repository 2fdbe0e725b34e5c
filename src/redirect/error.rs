//! Error definitions for the redirect engine.

use thiserror::Error;

/// Raised when a request path contains characters outside the whitelist.
///
/// This is expected adversarial traffic, not a fault: callers convert it
/// into a 400 response and log it at warn level.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid path contains unsafe characters: {path:?}")]
pub struct SecurityViolation {
    /// The offending raw path, safe to echo back to the caller.
    pub path: String,
}

/// Errors that can occur while assembling the redirect URL.
///
/// Both variants are operator/configuration faults surfaced as HTTP 500;
/// they are kept distinct so observability can tell a deployment typo from
/// anything else that goes wrong during assembly.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The configured target cannot be parsed as an absolute URL.
    #[error("malformed target URL {url:?}: {source}")]
    MalformedTarget {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The target parsed but cannot carry a path (e.g. `mailto:`), or any
    /// other unexpected assembly failure.
    #[error("URL assembly failed: {0}")]
    Unclassified(String),
}
