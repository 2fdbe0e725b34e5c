//! Redirect decision and URL-construction engine.
//!
//! # Data Flow
//! ```text
//! raw path + query pairs
//!     → exclusion.rs (bypass check, raw path)
//!     → sanitize.rs (character whitelist, traversal stripping)
//!     → filter.rs (query parameter whitelist)   [independent of path]
//!     → tracking.rs (generated x-sws-* context)
//!     → builder.rs (base + path + query assembly)
//!     → engine.rs (orchestration, error classification, Outcome)
//! ```
//!
//! # Design Decisions
//! - Every component is pure or request-scoped; the only process-wide
//!   state is the immutable `RedirectSettings`
//! - Validation failures become typed `Outcome` variants at the engine
//!   boundary and never escape as errors

pub mod builder;
pub mod engine;
pub mod error;
pub mod exclusion;
pub mod filter;
pub mod sanitize;
pub mod tracking;

pub use engine::{IncomingRequest, Outcome, RedirectEngine, RedirectObserver, RedirectSettings};
pub use error::{BuildError, SecurityViolation};
pub use filter::{AllowedParam, DroppedParam, FilteredParams};
pub use sanitize::SanitizedPath;
pub use tracking::{TrackingContext, EVENT_NAME};
