use http::{HeaderMap, HeaderName, HeaderValue};
use regex::Regex;

/// Matching operations for HTTP headers.
#[derive(Debug)]
pub enum Operation {
    /// Exact match on a header value.
    Eq(HeaderName, HeaderValue),
    /// Header presence check, regardless of value.
    Exist(HeaderName),
    /// Match any of several values.
    In(HeaderName, Vec<HeaderValue>),
    /// Substring match within the header value, e.g. `"json"` in
    /// `application/json; charset=utf-8`.
    Contains(HeaderName, String),
    /// Pattern match using a regular expression.
    Regex(HeaderName, Regex),
}

impl Operation {
    /// Checks the operation against the header map.
    pub fn check(&self, headers: &HeaderMap) -> bool {
        match self {
            Operation::Eq(name, value) => headers
                .get_all(name)
                .iter()
                .any(|header_value| value.eq(header_value)),
            Operation::Exist(name) => headers.get(name).is_some(),
            Operation::In(name, values) => headers
                .get_all(name)
                .iter()
                .any(|header_value| values.iter().any(|v| v.eq(header_value))),
            Operation::Contains(name, substring) => {
                headers.get_all(name).iter().any(|header_value| {
                    header_value
                        .to_str()
                        .map(|s| s.contains(substring.as_str()))
                        .unwrap_or(false)
                })
            }
            Operation::Regex(name, regex) => headers.get_all(name).iter().any(|header_value| {
                header_value
                    .to_str()
                    .map(|s| regex.is_match(s))
                    .unwrap_or(false)
            }),
        }
    }
}
