//! The cache header layer and its builder.

use std::sync::Arc;

use folio_http::CacheHeaderPolicy;
use tower::Layer;

use crate::service::CacheHeadersService;

/// Tower layer that wraps a service with cache header enforcement.
///
/// Holds only immutable, process-wide configuration: the injected
/// specification (shared behind `Arc` across all request tasks) and the
/// header policy. The middleware depends on the specification contract
/// alone, never on a concrete policy implementation, so caching rules can
/// be swapped without touching this code.
pub struct CacheHeaders<P> {
    specification: Arc<P>,
    policy: CacheHeaderPolicy,
}

impl<P> CacheHeaders<P> {
    /// Creates the layer with the given specification and the stock
    /// header policy.
    pub fn new(specification: P) -> Self {
        Self {
            specification: Arc::new(specification),
            policy: CacheHeaderPolicy::default(),
        }
    }

    /// Replaces the header policy.
    pub fn with_policy(mut self, policy: CacheHeaderPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl CacheHeaders<()> {
    /// Starts a builder; the specification is supplied with
    /// [`CacheHeadersBuilder::specification`].
    pub fn builder() -> CacheHeadersBuilder<()> {
        CacheHeadersBuilder::default()
    }
}

impl<P> Clone for CacheHeaders<P> {
    fn clone(&self) -> Self {
        Self {
            specification: Arc::clone(&self.specification),
            policy: self.policy.clone(),
        }
    }
}

impl<S, P> Layer<S> for CacheHeaders<P> {
    type Service = CacheHeadersService<S, P>;

    fn layer(&self, upstream: S) -> Self::Service {
        CacheHeadersService::new(
            upstream,
            Arc::clone(&self.specification),
            self.policy.clone(),
        )
    }
}

/// Builder for [`CacheHeaders`].
pub struct CacheHeadersBuilder<P> {
    specification: P,
    policy: CacheHeaderPolicy,
}

impl Default for CacheHeadersBuilder<()> {
    fn default() -> Self {
        Self {
            specification: (),
            policy: CacheHeaderPolicy::default(),
        }
    }
}

impl<P> CacheHeadersBuilder<P> {
    /// Sets the cacheability specification.
    pub fn specification<NP>(self, specification: NP) -> CacheHeadersBuilder<NP> {
        CacheHeadersBuilder {
            specification,
            policy: self.policy,
        }
    }

    /// Sets the header policy.
    pub fn policy(mut self, policy: CacheHeaderPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Finishes the layer.
    pub fn build(self) -> CacheHeaders<P> {
        CacheHeaders {
            specification: Arc::new(self.specification),
            policy: self.policy,
        }
    }
}
