//! Operational endpoints reachable only through the exclusion pattern.
//!
//! The redirector sends everything to the target origin except paths
//! matching the configured exclusion pattern (by convention `/backend/*`).
//! Those requests are served locally: a health probe and a version/info
//! endpoint.

pub mod handlers;

/// Static facts about this deployment, reported by the operational
/// endpoints.
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub environment: String,
    pub version: String,
    pub target_url: String,
}
