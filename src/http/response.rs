//! Outcome-to-response mapping.
//!
//! # Design Decisions
//! - 400 bodies carry the rejection reason (derived only from the
//!   request's own structure); 500 bodies carry only an opaque error id,
//!   never the internal cause
//! - Excluded paths are dispatched to the local operational endpoints

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};

use crate::backend::{handlers, ServiceInfo};
use crate::redirect::Outcome;

/// Turn an engine outcome into the HTTP response the caller sees.
/// `path` is the raw request path, needed only for the excluded case.
pub fn respond(outcome: Outcome, path: &str, info: &ServiceInfo) -> Response {
    match outcome {
        Outcome::Excluded => handlers::serve(path, info),
        Outcome::Redirect { location, status } => redirect(&location, status),
        Outcome::Rejected {
            reason,
            error_id,
            status,
        } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_REQUEST);
            (
                status,
                Json(serde_json::json!({
                    "error": "invalid_request",
                    "error_id": error_id,
                    "message": reason,
                })),
            )
                .into_response()
        }
        Outcome::Failed { error_id, status, .. } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (
                status,
                Json(serde_json::json!({
                    "error": "redirect_failed",
                    "error_id": error_id,
                    "message": "Redirect failed",
                })),
            )
                .into_response()
        }
    }
}

fn redirect(location: &str, status: u16) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::FOUND);
    match HeaderValue::from_str(location) {
        Ok(value) => {
            let mut response = status.into_response();
            response.headers_mut().insert(header::LOCATION, value);
            response
        }
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Redirect failed").into_response(),
    }
}
