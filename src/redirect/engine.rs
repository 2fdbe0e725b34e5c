//! Redirect orchestration.
//!
//! # Data Flow
//! ```text
//! IncomingRequest
//!     → exclusion check (raw path)      → Outcome::Excluded
//!     → path sanitization               → Outcome::Rejected (400)
//!     → parameter filter + tracking context
//!     → URL assembly                    → Outcome::Failed (500)
//!     → Outcome::Redirect (configured status, default 302)
//! ```
//!
//! # Design Decisions
//! - Every failure is converted into an `Outcome`; nothing propagates to
//!   the HTTP layer as an error
//! - The engine holds no per-request state; configuration is immutable
//!   after construction
//! - Observability flows through an injected sink whose failures cannot
//!   affect the outcome

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::redirect::builder;
use crate::redirect::exclusion;
use crate::redirect::filter;
use crate::redirect::sanitize;
use crate::redirect::tracking::TrackingContext;

/// Immutable per-process redirect configuration.
#[derive(Debug, Clone)]
pub struct RedirectSettings {
    /// Target origin requests are redirected to.
    pub target_url: String,

    /// Paths matching this pattern bypass redirection entirely.
    pub exclude_pattern: String,

    /// Deployment environment label attached as `x-sws-env`.
    pub environment: String,

    /// Service version label attached as `x-sws-version`.
    pub version: String,

    /// HTTP status for redirect responses.
    pub status_code: u16,
}

/// Immutable snapshot of an inbound request. Headers and remote address
/// are captured for observability only and never validated.
#[derive(Debug, Clone, Default)]
pub struct IncomingRequest {
    pub path: Option<String>,

    /// Raw query pairs in wire order; duplicate keys preserved.
    pub query: Vec<(String, String)>,

    pub remote_addr: Option<SocketAddr>,
    pub user_agent: Option<String>,
}

/// Terminal result of handling one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Path matched the exclusion pattern; the caller must serve the
    /// request itself, unmodified.
    Excluded,

    /// Redirect to `location` with the configured status code.
    Redirect { location: String, status: u16 },

    /// Request rejected (unsafe path). `reason` is derived only from the
    /// request's own structure and is safe to return to the caller.
    Rejected {
        reason: String,
        error_id: String,
        status: u16,
    },

    /// Building the redirect failed (configuration fault or worse). The
    /// `reason` goes to observability, never verbatim to the caller.
    Failed {
        reason: String,
        error_id: String,
        status: u16,
    },
}

impl Outcome {
    /// Stable label for metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Excluded => "excluded",
            Outcome::Redirect { .. } => "redirect",
            Outcome::Rejected { .. } => "rejected",
            Outcome::Failed { .. } => "failed",
        }
    }
}

/// Side-channel observability boundary. Implementations must be
/// infallible; the engine ignores anything they do.
pub trait RedirectObserver: Send + Sync {
    /// Called exactly once per request with the terminal outcome and the
    /// engine-side latency.
    fn request_handled(&self, outcome: &Outcome, elapsed: Duration);

    /// Called for every query parameter the filter refused. `value` is
    /// `None` when the name itself was not whitelisted.
    fn parameter_dropped(&self, name: &str, value: Option<&str>);
}

/// Sequences exclusion, sanitization, filtering, and URL assembly into a
/// single outcome per request.
pub struct RedirectEngine {
    settings: RedirectSettings,
    observer: Arc<dyn RedirectObserver>,
}

impl RedirectEngine {
    pub fn new(settings: RedirectSettings, observer: Arc<dyn RedirectObserver>) -> Self {
        Self { settings, observer }
    }

    pub fn settings(&self) -> &RedirectSettings {
        &self.settings
    }

    /// Decide the outcome for one request and report it to the observer.
    pub fn handle(&self, request: &IncomingRequest) -> Outcome {
        let started = Instant::now();
        let outcome = self.decide(request);
        self.observer.request_handled(&outcome, started.elapsed());
        outcome
    }

    fn decide(&self, request: &IncomingRequest) -> Outcome {
        let raw_path = request.path.as_deref().unwrap_or("");

        tracing::debug!(
            path = raw_path,
            remote_addr = ?request.remote_addr,
            user_agent = ?request.user_agent,
            "Handling request"
        );

        // Exclusion runs on the raw path, before any normalization.
        if exclusion::is_excluded(raw_path, &self.settings.exclude_pattern) {
            tracing::debug!(path = raw_path, "skipping redirect for excluded path");
            return Outcome::Excluded;
        }

        let sanitized = match sanitize::sanitize(request.path.as_deref()) {
            Ok(path) => path,
            Err(violation) => {
                return Outcome::Rejected {
                    reason: violation.to_string(),
                    error_id: Uuid::new_v4().to_string(),
                    status: 400,
                };
            }
        };

        let filtered = filter::filter(&request.query);
        for dropped in filtered.dropped() {
            self.observer
                .parameter_dropped(&dropped.name, dropped.value.as_deref());
        }

        let context =
            TrackingContext::generate(&self.settings.environment, &self.settings.version);

        match builder::build(&self.settings.target_url, &sanitized, &context, &filtered) {
            Ok(location) => Outcome::Redirect {
                location,
                status: self.settings.status_code,
            },
            Err(err) => Outcome::Failed {
                reason: err.to_string(),
                error_id: Uuid::new_v4().to_string(),
                status: 500,
            },
        }
    }
}
