//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML config
//! files; every field has a default so a minimal (or absent) config works.

use serde::{Deserialize, Serialize};

use crate::redirect::RedirectSettings;

/// Root configuration for the redirector.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Redirect target and tracking labels.
    pub redirect: RedirectConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Redirect behavior configuration, immutable for the process lifetime.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RedirectConfig {
    /// Target origin requests are redirected to (scheme + host).
    pub target_url: String,

    /// Paths matching this pattern bypass redirection. A trailing `*`
    /// makes it a prefix pattern; otherwise it is an exact match.
    pub exclude_pattern: String,

    /// Deployment environment label (`x-sws-env`).
    pub environment: String,

    /// Service version label (`x-sws-version`). Empty means "use the
    /// crate version".
    pub version: String,

    /// HTTP status for redirect responses (must be 3xx).
    pub status_code: u16,
}

impl RedirectConfig {
    /// The version label to advertise, falling back to the crate version
    /// when none is configured.
    pub fn resolved_version(&self) -> String {
        if self.version.is_empty() {
            env!("CARGO_PKG_VERSION").to_string()
        } else {
            self.version.clone()
        }
    }

    /// Snapshot this configuration into the engine's settings type.
    pub fn to_settings(&self) -> RedirectSettings {
        RedirectSettings {
            target_url: self.target_url.clone(),
            exclude_pattern: self.exclude_pattern.clone(),
            environment: self.environment.clone(),
            version: self.resolved_version(),
            status_code: self.status_code,
        }
    }
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            target_url: "https://example.org".to_string(),
            exclude_pattern: "/backend/*".to_string(),
            environment: "development".to_string(),
            version: String::new(),
            status_code: 302,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
