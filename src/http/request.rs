//! Request snapshot extraction.
//!
//! The engine never touches transport-layer objects; this module converts
//! an axum request into the immutable [`IncomingRequest`] value the
//! engine consumes.

use std::net::SocketAddr;

use axum::body::Body;
use axum::http::{header, Request};

use crate::redirect::IncomingRequest;

/// Capture the engine-relevant parts of a request. The path is taken raw
/// (still percent-encoded); query pairs are decoded and kept in wire
/// order with duplicates preserved.
pub fn snapshot(request: &Request<Body>, remote_addr: Option<SocketAddr>) -> IncomingRequest {
    IncomingRequest {
        path: Some(request.uri().path().to_string()),
        query: request
            .uri()
            .query()
            .map(parse_query)
            .unwrap_or_default(),
        remote_addr,
        user_agent: request
            .headers()
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    }
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_keeps_duplicate_query_keys_in_order() {
        let request = Request::builder()
            .uri("/search?a=1&b=2&a=3")
            .body(Body::empty())
            .unwrap();
        let snapshot = snapshot(&request, None);
        assert_eq!(snapshot.path.as_deref(), Some("/search"));
        assert_eq!(
            snapshot.query,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
                ("a".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_snapshot_decodes_query_but_not_path() {
        let request = Request::builder()
            .uri("/a%2Fb?q=hello%20world")
            .body(Body::empty())
            .unwrap();
        let snapshot = snapshot(&request, None);
        assert_eq!(snapshot.path.as_deref(), Some("/a%2Fb"));
        assert_eq!(snapshot.query[0].1, "hello world");
    }
}
