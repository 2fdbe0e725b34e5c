//! Metrics- and tracing-backed implementation of the engine's
//! observability boundary.

use std::time::Duration;

use crate::observability::metrics;
use crate::redirect::{Outcome, RedirectObserver};

/// Reports engine outcomes to the metrics registry and the structured
/// log. Rejections are expected adversarial traffic and log at warn;
/// failures are configuration faults and log at error.
#[derive(Debug, Default, Clone, Copy)]
pub struct TelemetrySink;

impl RedirectObserver for TelemetrySink {
    fn request_handled(&self, outcome: &Outcome, elapsed: Duration) {
        metrics::record_outcome(outcome.label(), elapsed);

        match outcome {
            Outcome::Excluded => {}
            Outcome::Redirect { location, .. } => {
                tracing::info!(location = %location, "Redirecting");
            }
            Outcome::Rejected {
                reason, error_id, ..
            } => {
                tracing::warn!(error_id = %error_id, reason = %reason, "Request rejected");
            }
            Outcome::Failed {
                reason, error_id, ..
            } => {
                tracing::error!(error_id = %error_id, reason = %reason, "Redirect failed");
            }
        }
    }

    fn parameter_dropped(&self, name: &str, value: Option<&str>) {
        metrics::record_dropped_param();
        match value {
            Some(value) => {
                tracing::warn!(name = %name, value = %value, "Invalid parameter value, skipping")
            }
            None => tracing::warn!(name = %name, "Non-whitelisted query parameter, skipping"),
        }
    }
}
