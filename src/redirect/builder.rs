//! Redirect URL assembly.
//!
//! # Responsibilities
//! - Parse the configured target base as an absolute URL, per request
//! - Append the sanitized path after any base path
//! - Serialize tracking parameters first, then surviving caller
//!   parameters, escaping each value individually
//!
//! # Design Decisions
//! - Duplicate query keys are serialized as-is, never collapsed: a caller
//!   supplying their own `x-sws-event` ends up after the generated one

use url::Url;

use crate::redirect::error::BuildError;
use crate::redirect::filter::FilteredParams;
use crate::redirect::sanitize::SanitizedPath;
use crate::redirect::tracking::TrackingContext;

/// Compose the absolute redirect URL.
pub fn build(
    base: &str,
    path: &SanitizedPath,
    tracking: &TrackingContext,
    params: &FilteredParams,
) -> Result<String, BuildError> {
    let mut url = Url::parse(base).map_err(|source| BuildError::MalformedTarget {
        url: base.to_string(),
        source,
    })?;

    if url.cannot_be_a_base() {
        return Err(BuildError::Unclassified(format!(
            "target {base:?} cannot carry a path"
        )));
    }

    let joined = format!("{}{}", url.path().trim_end_matches('/'), path.as_str());
    url.set_path(&joined);

    {
        let mut query = url.query_pairs_mut();
        for (name, value) in tracking.pairs() {
            query.append_pair(name, &value);
        }
        for (name, values) in params.iter() {
            for value in values {
                query.append_pair(name, value);
            }
        }
    }

    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redirect::filter;
    use crate::redirect::sanitize::sanitize;

    fn context() -> TrackingContext {
        TrackingContext {
            tracing_id: "a1b2c3d4-e5f6-7890-abcd-ef1234567890".to_string(),
            environment: "prod".to_string(),
            version: "1.0.0".to_string(),
            timestamp: 1_700_000_000,
        }
    }

    #[test]
    fn test_builds_absolute_url_with_tracking_first() {
        let path = sanitize(Some("/search")).unwrap();
        let url = build("https://example.com", &path, &context(), &FilteredParams::default())
            .unwrap();
        assert_eq!(
            url,
            "https://example.com/search?x-sws-event=dot-org-redirect\
             &x-sws-tracing-id=a1b2c3d4-e5f6-7890-abcd-ef1234567890\
             &x-sws-env=prod&x-sws-version=1.0.0&x-sws-ts=1700000000"
        );
    }

    #[test]
    fn test_caller_params_follow_tracking_params() {
        let path = sanitize(Some("/search")).unwrap();
        let params = filter::filter(&[("x-sws-ts".to_string(), "123".to_string())]);
        let url = build("https://example.com", &path, &context(), &params).unwrap();
        // Generated ts comes first, caller-supplied duplicate is appended.
        assert!(url.ends_with("&x-sws-ts=1700000000&x-sws-ts=123"));
    }

    #[test]
    fn test_base_path_is_preserved() {
        let path = sanitize(Some("/search")).unwrap();
        let url = build(
            "https://example.com/app/",
            &path,
            &context(),
            &FilteredParams::default(),
        )
        .unwrap();
        assert!(url.starts_with("https://example.com/app/search?"));
    }

    #[test]
    fn test_malformed_base_is_a_target_error() {
        let path = sanitize(Some("/")).unwrap();
        let err = build("not a valid url", &path, &context(), &FilteredParams::default())
            .unwrap_err();
        assert!(matches!(err, BuildError::MalformedTarget { .. }));
    }

    #[test]
    fn test_pathless_scheme_is_unclassified() {
        let path = sanitize(Some("/")).unwrap();
        let err = build(
            "mailto:ops@example.com",
            &path,
            &context(),
            &FilteredParams::default(),
        )
        .unwrap_err();
        assert!(matches!(err, BuildError::Unclassified(_)));
    }

    #[test]
    fn test_values_are_query_escaped() {
        let path = sanitize(Some("/search")).unwrap();
        let ctx = TrackingContext {
            environment: "pr od".to_string(),
            ..context()
        };
        let url = build("https://example.com", &path, &ctx, &FilteredParams::default())
            .unwrap();
        assert!(url.contains("x-sws-env=pr+od"));
    }
}
