//! dot-org-redirector
//!
//! An HTTP service that redirects every inbound request to a fixed target
//! origin, preserving the request path, attaching a generated tracking
//! context, and whitelisting caller-supplied query parameters.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │                 REDIRECTOR                    │
//!                     │                                               │
//!  Client Request     │  ┌─────────┐    ┌───────────────────────────┐│
//!  ───────────────────┼─▶│  http   │───▶│       redirect engine      ││
//!                     │  │ server  │    │ exclusion → sanitize →     ││
//!                     │  └─────────┘    │ filter → tracking → build  ││
//!                     │       │         └─────────────┬─────────────┘│
//!                     │       │                       │               │
//!                     │       ▼                       ▼               │
//!  302 + Location     │  ┌─────────┐           ┌──────────┐          │
//!  ◀──────────────────┼──│response │◀──────────│ Outcome  │          │
//!                     │  └─────────┘           └──────────┘          │
//!                     │                                               │
//!                     │  ┌─────────────────────────────────────────┐ │
//!                     │  │          Cross-Cutting Concerns          │ │
//!                     │  │  ┌────────┐ ┌─────────┐ ┌─────────────┐ │ │
//!                     │  │  │ config │ │ backend │ │observability│ │ │
//!                     │  │  │        │ │ health  │ │metrics+logs │ │ │
//!                     │  │  └────────┘ └─────────┘ └─────────────┘ │ │
//!                     │  └─────────────────────────────────────────┘ │
//!                     └──────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod redirect;

// Cross-cutting concerns
pub mod backend;
pub mod observability;

pub use config::AppConfig;
pub use http::HttpServer;
pub use redirect::{IncomingRequest, Outcome, RedirectEngine, RedirectSettings};
