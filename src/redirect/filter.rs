//! Query parameter whitelisting and validation.
//!
//! # Responsibilities
//! - Drop every parameter name outside the closed `x-sws-*` whitelist
//! - Validate surviving values against per-name character/length rules
//! - Preserve first-appearance key order and per-key value order
//!
//! # Design Decisions
//! - Pure function: never fails, invalid input is dropped and reported
//!   back for the caller to log
//! - A name with zero surviving values is omitted entirely

/// The closed set of query parameter names allowed through to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowedParam {
    Event,
    TracingId,
    Env,
    Version,
    Ts,
}

impl AllowedParam {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "x-sws-event" => Some(Self::Event),
            "x-sws-tracing-id" => Some(Self::TracingId),
            "x-sws-env" => Some(Self::Env),
            "x-sws-version" => Some(Self::Version),
            "x-sws-ts" => Some(Self::Ts),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Event => "x-sws-event",
            Self::TracingId => "x-sws-tracing-id",
            Self::Env => "x-sws-env",
            Self::Version => "x-sws-version",
            Self::Ts => "x-sws-ts",
        }
    }

    /// Returns true if `value` satisfies this parameter's character class
    /// and length bounds.
    fn accepts(self, value: &str) -> bool {
        let word = |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-');
        match self {
            Self::Event => (1..=50).contains(&value.len()) && value.chars().all(word),
            Self::TracingId => {
                value.len() == 36
                    && value.chars().all(|c| c.is_ascii_hexdigit() || c == '-')
            }
            Self::Env => (1..=20).contains(&value.len()) && value.chars().all(word),
            Self::Version => (1..=30).contains(&value.len()) && value.chars().all(word),
            Self::Ts => {
                (1..=15).contains(&value.len()) && value.chars().all(|c| c.is_ascii_digit())
            }
        }
    }
}

/// A parameter the filter refused, reported for caller-side logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedParam {
    pub name: String,
    /// `None` when the name itself was not whitelisted; `Some` when the
    /// name was fine but this value failed validation.
    pub value: Option<String>,
}

/// Result of filtering: surviving parameters plus everything dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilteredParams {
    kept: Vec<(AllowedParam, Vec<String>)>,
    dropped: Vec<DroppedParam>,
}

impl FilteredParams {
    /// Surviving parameters in first-appearance key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> + '_ {
        self.kept
            .iter()
            .map(|(param, values)| (param.name(), values.as_slice()))
    }

    pub fn dropped(&self) -> &[DroppedParam] {
        &self.dropped
    }

    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }

    fn keep(&mut self, param: AllowedParam, value: String) {
        match self.kept.iter_mut().find(|(p, _)| *p == param) {
            Some((_, values)) => values.push(value),
            None => self.kept.push((param, vec![value])),
        }
    }
}

/// Filter raw query pairs down to validated, whitelisted parameters.
pub fn filter(pairs: &[(String, String)]) -> FilteredParams {
    let mut result = FilteredParams::default();

    for (name, value) in pairs {
        let Some(param) = AllowedParam::from_name(name) else {
            result.dropped.push(DroppedParam {
                name: name.clone(),
                value: None,
            });
            continue;
        };
        if value.is_empty() || !param.accepts(value) {
            result.dropped.push(DroppedParam {
                name: name.clone(),
                value: Some(value.clone()),
            });
            continue;
        }
        result.keep(param, value.clone());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(input: &[(&str, &str)]) -> Vec<(String, String)> {
        input
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn kept(filtered: &FilteredParams) -> Vec<(&'static str, Vec<String>)> {
        filtered
            .iter()
            .map(|(name, values)| (name, values.to_vec()))
            .collect()
    }

    #[test]
    fn test_non_whitelisted_names_dropped() {
        let result = filter(&pairs(&[("utm_source", "google"), ("q", "test")]));
        assert!(result.is_empty());
        assert_eq!(result.dropped().len(), 2);
        assert_eq!(result.dropped()[0].name, "utm_source");
        assert_eq!(result.dropped()[0].value, None);
    }

    #[test]
    fn test_valid_whitelisted_values_kept() {
        let result = filter(&pairs(&[
            ("x-sws-event", "page-view"),
            ("x-sws-env", "prod"),
            ("x-sws-version", "1.0.0"),
            ("x-sws-ts", "1700000000"),
        ]));
        assert_eq!(
            kept(&result),
            vec![
                ("x-sws-event", vec!["page-view".to_string()]),
                ("x-sws-env", vec!["prod".to_string()]),
                ("x-sws-version", vec!["1.0.0".to_string()]),
                ("x-sws-ts", vec!["1700000000".to_string()]),
            ]
        );
        assert!(result.dropped().is_empty());
    }

    #[test]
    fn test_oversized_event_dropped() {
        let long = "e".repeat(51);
        let result = filter(&pairs(&[("x-sws-event", long.as_str())]));
        assert!(result.is_empty());
        assert_eq!(result.dropped()[0].value.as_deref(), Some(long.as_str()));

        let max = "e".repeat(50);
        assert!(!filter(&pairs(&[("x-sws-event", max.as_str())])).is_empty());
    }

    #[test]
    fn test_tracing_id_must_be_exactly_36_hex_chars() {
        let valid = "a1b2c3d4-e5f6-7890-abcd-ef1234567890";
        assert!(!filter(&pairs(&[("x-sws-tracing-id", valid)])).is_empty());

        for bad in [
            "a1b2c3d4-e5f6-7890-abcd-ef123456789", // 35 chars
            "g1b2c3d4-e5f6-7890-abcd-ef1234567890", // non-hex
            "a1b2c3d4e5f67890abcdef1234567890abcd!", // 37 chars
        ] {
            assert!(filter(&pairs(&[("x-sws-tracing-id", bad)])).is_empty());
        }
    }

    #[test]
    fn test_ts_digits_only() {
        assert!(!filter(&pairs(&[("x-sws-ts", "1700000000")])).is_empty());
        assert!(filter(&pairs(&[("x-sws-ts", "17e9")])).is_empty());
        assert!(filter(&pairs(&[("x-sws-ts", "1234567890123456")])).is_empty());
    }

    #[test]
    fn test_empty_values_dropped() {
        let result = filter(&pairs(&[("x-sws-env", "")]));
        assert!(result.is_empty());
    }

    #[test]
    fn test_name_with_no_surviving_values_omitted() {
        let result = filter(&pairs(&[("x-sws-env", "bad env!"), ("x-sws-ts", "12345")]));
        assert_eq!(kept(&result), vec![("x-sws-ts", vec!["12345".to_string()])]);
    }

    #[test]
    fn test_value_order_preserved_per_key() {
        let result = filter(&pairs(&[
            ("x-sws-event", "first"),
            ("x-sws-ts", "111"),
            ("x-sws-event", "second"),
        ]));
        assert_eq!(
            kept(&result),
            vec![
                (
                    "x-sws-event",
                    vec!["first".to_string(), "second".to_string()]
                ),
                ("x-sws-ts", vec!["111".to_string()]),
            ]
        );
    }
}
