//! Exclusion matching for paths that must bypass redirection.
//!
//! # Design Decisions
//! - Matches run on the raw incoming path, before any sanitization
//! - A trailing `*` turns the pattern into a prefix match; anything else
//!   is exact string equality
//! - No regex to guarantee O(n) matching

/// Returns true if `path` matches the configured exclusion pattern.
///
/// An empty pattern never excludes anything.
pub fn is_excluded(path: &str, pattern: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }
    match pattern.strip_suffix('*') {
        Some(prefix) => path.starts_with(prefix),
        None => path == pattern,
    }
}
