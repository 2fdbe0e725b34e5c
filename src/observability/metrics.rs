//! Metrics collection and exposition.
//!
//! # Metrics
//! - `redirect_requests_total` (counter): every engine invocation
//! - `redirect_outcomes_total{outcome}` (counter): terminal outcome split
//! - `redirect_duration_seconds` (histogram): engine-side latency
//! - `redirect_params_dropped_total` (counter): filtered-out parameters
//!
//! # Design Decisions
//! - Prometheus exporter on a dedicated listener, separate from traffic
//! - Updates are cheap atomic operations; a missing recorder makes every
//!   update a no-op, so tests need no setup

use std::net::SocketAddr;
use std::time::Duration;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            describe_counter!("redirect_requests_total", "Total redirect engine invocations");
            describe_counter!(
                "redirect_outcomes_total",
                "Engine invocations by terminal outcome"
            );
            describe_histogram!(
                "redirect_duration_seconds",
                "Time spent deciding and building a redirect"
            );
            describe_counter!(
                "redirect_params_dropped_total",
                "Query parameters refused by the whitelist filter"
            );
            tracing::info!(address = %addr, "Metrics endpoint started");
        }
        Err(e) => {
            tracing::error!(address = %addr, error = %e, "Failed to start metrics endpoint");
        }
    }
}

/// Record one engine invocation with its terminal outcome label.
pub fn record_outcome(outcome: &'static str, elapsed: Duration) {
    counter!("redirect_requests_total").increment(1);
    counter!("redirect_outcomes_total", "outcome" => outcome).increment(1);
    histogram!("redirect_duration_seconds").record(elapsed.as_secs_f64());
}

/// Record a query parameter refused by the filter.
pub fn record_dropped_param() {
    counter!("redirect_params_dropped_total").increment(1);
}
