//! Structured logging initialization.
//!
//! Uses the tracing crate; the level comes from config but can always be
//! overridden with `RUST_LOG`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
pub fn init(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "dot_org_redirector={log_level},tower_http=info"
                ))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
