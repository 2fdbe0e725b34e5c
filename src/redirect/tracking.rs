//! Tracking context generation.
//!
//! Every redirect carries a fixed bundle of generated query parameters:
//! event name, a fresh tracing id, the deployment environment, the service
//! version, and an epoch-seconds timestamp taken at generation time.

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

/// Event name attached to every redirect.
pub const EVENT_NAME: &str = "dot-org-redirect";

/// The generated tracking parameters for a single redirect. Created fresh
/// per request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingContext {
    pub tracing_id: String,
    pub environment: String,
    pub version: String,
    pub timestamp: u64,
}

impl TrackingContext {
    /// Generate a context with a fresh v4 UUID tracing id and the current
    /// epoch time in seconds.
    pub fn generate(environment: &str, version: &str) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        Self {
            tracing_id: Uuid::new_v4().to_string(),
            environment: environment.to_string(),
            version: version.to_string(),
            timestamp,
        }
    }

    /// The context as query pairs, in the fixed serialization order.
    pub fn pairs(&self) -> [(&'static str, String); 5] {
        [
            ("x-sws-event", EVENT_NAME.to_string()),
            ("x-sws-tracing-id", self.tracing_id.clone()),
            ("x-sws-env", self.environment.clone()),
            ("x-sws-version", self.version.clone()),
            ("x-sws-ts", self.timestamp.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_id_is_uuid_shaped() {
        let ctx = TrackingContext::generate("prod", "1.0.0");
        assert_eq!(ctx.tracing_id.len(), 36);
        assert!(Uuid::parse_str(&ctx.tracing_id).is_ok());
    }

    #[test]
    fn test_tracing_id_fresh_per_context() {
        let a = TrackingContext::generate("prod", "1.0.0");
        let b = TrackingContext::generate("prod", "1.0.0");
        assert_ne!(a.tracing_id, b.tracing_id);
    }

    #[test]
    fn test_timestamp_is_current_epoch_seconds() {
        let before = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let ctx = TrackingContext::generate("prod", "1.0.0");
        assert!(ctx.timestamp >= before);
        assert!(ctx.timestamp <= before + 5);
    }

    #[test]
    fn test_pair_order_is_fixed() {
        let ctx = TrackingContext::generate("staging", "2.1");
        let names: Vec<&str> = ctx.pairs().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec![
                "x-sws-event",
                "x-sws-tracing-id",
                "x-sws-env",
                "x-sws-version",
                "x-sws-ts"
            ]
        );
        assert_eq!(ctx.pairs()[0].1, EVENT_NAME);
    }
}
