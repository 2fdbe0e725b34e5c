//! Handlers for the operational endpoints served behind the exclusion
//! pattern.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::backend::ServiceInfo;

/// Dispatch an excluded-path request to the matching operational
/// endpoint. Unknown excluded paths get a 404.
pub fn serve(path: &str, info: &ServiceInfo) -> Response {
    match path {
        "/backend/health" => health(info),
        "/backend/version" => version(info),
        _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

fn health(info: &ServiceInfo) -> Response {
    Json(serde_json::json!({
        "status": "UP",
        "components": {
            "core": { "status": "UP" },
            "redirector": {
                "status": "UP",
                "target_url": info.target_url,
            },
        },
    }))
    .into_response()
}

fn version(info: &ServiceInfo) -> Response {
    Json(serde_json::json!({
        "version": info.version,
        "environment": info.environment,
    }))
    .into_response()
}
