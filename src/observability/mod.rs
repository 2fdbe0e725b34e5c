//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! redirect engine outcomes
//!     → sink.rs (RedirectObserver implementation)
//!         → logging.rs (structured log events)
//!         → metrics.rs (counters, histogram, Prometheus endpoint)
//! ```
//!
//! # Design Decisions
//! - The engine sees only the `RedirectObserver` trait; this module owns
//!   the concrete wiring to tracing and the metrics registry
//! - Sink operations are infallible and cannot affect request outcomes

pub mod logging;
pub mod metrics;
pub mod sink;

pub use sink::TelemetrySink;
