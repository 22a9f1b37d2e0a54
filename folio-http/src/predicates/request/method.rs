use async_trait::async_trait;
use folio_core::{Neutral, Predicate, PredicateResult};

use crate::CacheableRequest;

/// Matching operations for HTTP methods.
#[derive(Debug)]
pub enum Operation {
    /// Match a single HTTP method.
    Eq(http::Method),
    /// Match any of the specified HTTP methods.
    In(Vec<http::Method>),
}

/// A predicate that matches requests by HTTP method.
///
/// Returns `Cacheable` when the request method matches,
/// `NonCacheable` otherwise. Use [`Method::new`] to start a new chain or
/// the [`MethodPredicate`] extension trait to chain onto an existing one.
#[derive(Debug)]
pub struct Method<P> {
    operation: Operation,
    inner: P,
}

impl<S> Method<Neutral<S>> {
    /// Creates a predicate matching requests with the given HTTP method.
    pub fn new(method: http::Method) -> Self {
        Self {
            operation: Operation::Eq(method),
            inner: Neutral::new(),
        }
    }
}

impl<P> Method<P> {
    /// Creates a predicate matching requests with any of the given HTTP
    /// methods, e.g. GET and HEAD.
    pub fn new_in(inner: P, methods: Vec<http::Method>) -> Self {
        Self {
            operation: Operation::In(methods),
            inner,
        }
    }
}

/// Extension trait for adding a method match to a predicate chain.
pub trait MethodPredicate: Sized {
    /// Adds an HTTP method match to this predicate chain.
    fn method(self, method: http::Method) -> Method<Self>;
}

impl<P> MethodPredicate for P
where
    P: Predicate,
{
    fn method(self, method: http::Method) -> Method<Self> {
        Method {
            operation: Operation::Eq(method),
            inner: self,
        }
    }
}

#[async_trait]
impl<P, B> Predicate for Method<P>
where
    P: Predicate<Subject = CacheableRequest<B>> + Send + Sync,
    B: Send + 'static,
{
    type Subject = P::Subject;

    async fn check(&self, request: Self::Subject) -> PredicateResult<Self::Subject> {
        match self.inner.check(request).await {
            PredicateResult::Cacheable(request) => {
                let is_cacheable = match &self.operation {
                    Operation::Eq(method) => *method == request.parts().method,
                    Operation::In(methods) => methods.contains(&request.parts().method),
                };
                if is_cacheable {
                    PredicateResult::Cacheable(request)
                } else {
                    PredicateResult::NonCacheable(request)
                }
            }
            PredicateResult::NonCacheable(request) => PredicateResult::NonCacheable(request),
        }
    }
}
