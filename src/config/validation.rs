//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (redirect status is 3xx, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - A target URL that does not parse is NOT a validation error: the
//!   process must come up and answer 500s loudly rather than crash-loop,
//!   so that fault is detected at request time and at startup logging

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic configuration problem.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    BindAddress(String),

    #[error("redirect.target_url must not be empty")]
    EmptyTargetUrl,

    #[error("redirect.environment must not be empty")]
    EmptyEnvironment,

    #[error("redirect.status_code {0} is not a redirect status (300-399)")]
    StatusCode(u16),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("observability.metrics_address {0:?} is not a valid socket address")]
    MetricsAddress(String),
}

/// Check an [`AppConfig`] for semantic problems, collecting every error.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.redirect.target_url.is_empty() {
        errors.push(ValidationError::EmptyTargetUrl);
    }

    if config.redirect.environment.is_empty() {
        errors.push(ValidationError::EmptyEnvironment);
    }

    if !(300..=399).contains(&config.redirect.status_code) {
        errors.push(ValidationError::StatusCode(config.redirect.status_code));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
