//! The Tower service that applies the cacheability verdict.

use std::sync::Arc;

use folio_core::{Predicate, PredicateResult};
use folio_http::{CacheHeaderPolicy, CacheableRequest};
use http::{Request, Response};
use tower::Service;

use crate::future::CacheHeadersFuture;

/// Service wrapper produced by [`CacheHeaders`](crate::CacheHeaders).
///
/// For every non-`OPTIONS` request the specification is evaluated before
/// the request is dispatched upstream, and the baseline header state for
/// the verdict is written once the response resolves. Forwarding is
/// unconditional — a non-cacheable verdict still reaches the upstream,
/// and upstream faults propagate unmodified.
pub struct CacheHeadersService<S, P> {
    upstream: S,
    specification: Arc<P>,
    policy: CacheHeaderPolicy,
}

impl<S, P> CacheHeadersService<S, P> {
    /// Creates the service around an upstream stage.
    pub fn new(upstream: S, specification: Arc<P>, policy: CacheHeaderPolicy) -> Self {
        Self {
            upstream,
            specification,
            policy,
        }
    }
}

impl<S, P> Clone for CacheHeadersService<S, P>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            upstream: self.upstream.clone(),
            specification: Arc::clone(&self.specification),
            policy: self.policy.clone(),
        }
    }
}

impl<S, P, ReqBody, ResBody> Service<Request<ReqBody>> for CacheHeadersService<S, P>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send,
    S::Error: Send + 'static,
    P: Predicate<Subject = CacheableRequest<ReqBody>> + Send + Sync + 'static,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = CacheHeadersFuture<ResBody, S::Error>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.upstream.poll_ready(cx)
    }

    fn call(&mut self, request: Request<ReqBody>) -> Self::Future {
        let specification = Arc::clone(&self.specification);
        let policy = self.policy.clone();
        // Take the service that was driven to readiness; leave the clone.
        let clone = self.upstream.clone();
        let mut upstream = std::mem::replace(&mut self.upstream, clone);

        CacheHeadersFuture::new(Box::pin(async move {
            if request.method() == http::Method::OPTIONS {
                return upstream.call(request).await;
            }

            let subject = CacheableRequest::from_request(request);
            let (cacheable, subject) = match specification.check(subject).await {
                PredicateResult::Cacheable(subject) => (true, subject),
                PredicateResult::NonCacheable(subject) => (false, subject),
            };
            let request = subject.into_request();
            tracing::trace!(
                method = %request.method(),
                path = request.uri().path(),
                cacheable,
                "cacheability verdict"
            );

            let mut response = upstream.call(request).await?;
            if cacheable {
                policy.apply_enabled(response.headers_mut());
            } else {
                policy.apply_disabled(response.headers_mut());
            }
            Ok(response)
        }))
    }
}
