//! The two fixed cache header states written onto responses.
//!
//! A response leaves the decision layer in exactly one of two states:
//! "cache enabled" or "cache disabled", each a fixed directive set. The
//! directives themselves are configurable, but the same verdict always
//! produces the same directives.

use http::header::{CACHE_CONTROL, EXPIRES, HeaderMap, HeaderName, HeaderValue, PRAGMA};
use thiserror::Error;

/// Error building a custom [`CacheHeaderPolicy`].
#[derive(Debug, Error)]
pub enum PolicyError {
    /// A directive used an invalid header name.
    #[error("invalid header name: {0}")]
    InvalidName(#[from] http::header::InvalidHeaderName),
    /// A directive used an invalid header value.
    #[error("invalid header value: {0}")]
    InvalidValue(#[from] http::header::InvalidHeaderValue),
}

/// The directive sets applied for each cacheability verdict.
///
/// Application uses insert-if-absent semantics: a header the downstream
/// handler already set wins over the baseline. See
/// [`apply_enabled`](Self::apply_enabled).
#[derive(Debug, Clone)]
pub struct CacheHeaderPolicy {
    enabled: Vec<(HeaderName, HeaderValue)>,
    disabled: Vec<(HeaderName, HeaderValue)>,
}

impl Default for CacheHeaderPolicy {
    /// The stock directive sets: long-lived public caching when enabled,
    /// no-store plus the legacy `Pragma`/`Expires` pair when disabled.
    fn default() -> Self {
        Self {
            enabled: vec![(
                CACHE_CONTROL,
                HeaderValue::from_static("max-age=31536000, public"),
            )],
            disabled: vec![
                (CACHE_CONTROL, HeaderValue::from_static("no-cache, no-store")),
                (PRAGMA, HeaderValue::from_static("no-cache")),
                (EXPIRES, HeaderValue::from_static("0")),
            ],
        }
    }
}

impl CacheHeaderPolicy {
    /// Starts building a policy with custom directive sets.
    pub fn builder() -> CacheHeaderPolicyBuilder {
        CacheHeaderPolicyBuilder::default()
    }

    /// Writes the "cache enabled" baseline onto the headers.
    ///
    /// Directives already present are left untouched, so a handler that
    /// set its own `Cache-Control` overrides the baseline.
    pub fn apply_enabled(&self, headers: &mut HeaderMap) {
        Self::apply(&self.enabled, headers);
    }

    /// Writes the "cache disabled" baseline onto the headers.
    pub fn apply_disabled(&self, headers: &mut HeaderMap) {
        Self::apply(&self.disabled, headers);
    }

    fn apply(directives: &[(HeaderName, HeaderValue)], headers: &mut HeaderMap) {
        for (name, value) in directives {
            headers.entry(name).or_insert_with(|| value.clone());
        }
    }
}

/// Builder for a [`CacheHeaderPolicy`] with custom directive sets.
///
/// Starts empty; directives are added per verdict. Use
/// [`CacheHeaderPolicy::default`] for the stock sets.
#[derive(Debug, Default)]
pub struct CacheHeaderPolicyBuilder {
    enabled: Vec<(HeaderName, HeaderValue)>,
    disabled: Vec<(HeaderName, HeaderValue)>,
}

impl CacheHeaderPolicyBuilder {
    /// Adds a directive to the "cache enabled" state.
    pub fn enabled_directive(mut self, name: &str, value: &str) -> Result<Self, PolicyError> {
        self.enabled
            .push((name.parse::<HeaderName>()?, value.parse::<HeaderValue>()?));
        Ok(self)
    }

    /// Adds a directive to the "cache disabled" state.
    pub fn disabled_directive(mut self, name: &str, value: &str) -> Result<Self, PolicyError> {
        self.disabled
            .push((name.parse::<HeaderName>()?, value.parse::<HeaderValue>()?));
        Ok(self)
    }

    /// Finishes the policy.
    pub fn build(self) -> CacheHeaderPolicy {
        CacheHeaderPolicy {
            enabled: self.enabled,
            disabled: self.disabled,
        }
    }
}
